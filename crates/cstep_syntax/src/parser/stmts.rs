/// Statement parsing.
///
/// Statements are dispatched on their first token by `Parser::parse`:
/// - a type keyword starts a declaration;
/// - an identifier starts a function call or an assignment, decided by the token after it.
impl<'a> Parser<'a> {
    /// `TYPE IDENT ('=' Expression)? ';'`
    fn declaration(&mut self) -> Result<Lined<Statement>, SyntaxError> {
        self.enter(Routine::Declaration, "Starting declaration");

        let keyword = self.expect(TokenKind::Keyword, None)?;
        let Some(declared_type) = keyword.declaration_type(self.vocab) else {
            return Err(SyntaxError::new(
                format!("Expected type keyword, got '{}'", keyword.lexeme),
                keyword.position.line,
                span_of(keyword),
            )
            .with_expected("type keyword")
            .with_found(keyword.lexeme.as_str()));
        };
        let name = self.expect(TokenKind::Identifier, None)?;
        self.node_created(
            format!("Created declaration: {} {}", keyword.lexeme, name.lexeme),
            format!("Declaration({} {})", keyword.lexeme, name.lexeme),
            None,
        );

        let initializer = if self.current().is_some_and(|t| t.is_operator(OperatorId::Eq)) {
            self.expect_operator(OperatorId::Eq)?;
            Some(self.expression()?)
        } else {
            None
        };
        self.expect_delimiter(DelimiterId::Semicolon)?;
        self.leave(Routine::Declaration, "Declaration complete", None);

        let decl = Declaration {
            declared_type,
            name: name.lexeme.clone(),
            initializer,
        };
        Ok(Lined::new(Statement::Declaration(decl), keyword.position.line))
    }

    /// `IDENT` followed by a call or an assignment tail.
    fn identifier_statement(&mut self) -> Result<Lined<Statement>, SyntaxError> {
        self.enter(Routine::IdentifierStatement, "Starting identifier statement");

        let name = self.expect(TokenKind::Identifier, None)?;
        let stmt = if self.at_delimiter(DelimiterId::LParen) {
            self.function_call_tail(name)?
        } else {
            self.assign_tail(name)?
        };

        self.leave(Routine::IdentifierStatement, "Identifier statement complete", None);
        Ok(Lined::new(stmt, name.position.line))
    }

    /// `'(' (Expression (',' Expression)*)? ')' ';'`
    fn function_call_tail(&mut self, name: &'a Token) -> Result<Statement, SyntaxError> {
        self.enter(Routine::FunctionCall, "Starting function call");

        self.expect_delimiter(DelimiterId::LParen)?;
        let mut args = Vec::new();
        if self.current().is_some() && !self.at_delimiter(DelimiterId::RParen) {
            args.push(self.expression()?);
            while self.at_delimiter(DelimiterId::Comma) {
                self.expect_delimiter(DelimiterId::Comma)?;
                args.push(self.expression()?);
            }
        }
        self.expect_delimiter(DelimiterId::RParen)?;
        self.expect_delimiter(DelimiterId::Semicolon)?;

        let count = args.len();
        let call = Statement::FunctionCall(FunctionCall {
            name: name.lexeme.clone(),
            args,
        });
        self.node_created(
            format!("Created function call: {} with {count} argument(s)", name.lexeme),
            call.summary(),
            None,
        );
        self.leave(Routine::FunctionCall, "Function call complete", None);
        Ok(call)
    }

    /// `'=' Expression ';'`
    fn assign_tail(&mut self, name: &'a Token) -> Result<Statement, SyntaxError> {
        self.enter(Routine::Assignment, "Starting assignment");

        self.expect_operator(OperatorId::Eq)?;
        let value = self.expression()?;
        self.expect_delimiter(DelimiterId::Semicolon)?;

        let assign = Statement::Assignment(Assignment {
            target: name.lexeme.clone(),
            value,
        });
        self.node_created(format!("Created assignment: {} =", name.lexeme), assign.summary(), None);
        self.leave(Routine::Assignment, "Assignment complete", None);
        Ok(assign)
    }
}
