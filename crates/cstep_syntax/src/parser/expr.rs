/// Expression parsing.
///
/// Two precedence levels, both left-associative:
/// - additive (`+`, `-`)
/// - multiplicative (`*`, `/`), binding tighter
///
/// Each level folds left-to-right: every matched operator combines the tree built so far with the next operand.
impl<'a> Parser<'a> {
    fn expression(&mut self) -> Result<Lined<Expr>, SyntaxError> {
        self.enter(Routine::Expression, "Starting expression parsing");
        let expr = self.additive()?;
        self.leave(Routine::Expression, "Expression parsing complete", None);
        Ok(expr)
    }

    fn additive(&mut self) -> Result<Lined<Expr>, SyntaxError> {
        self.enter(Routine::AdditiveExpression, "Starting additive expression");
        let expr = self.fold_binary(&[BinaryOp::Add, BinaryOp::Sub], Self::multiplicative)?;
        self.leave(Routine::AdditiveExpression, "Additive expression complete", None);
        Ok(expr)
    }

    fn multiplicative(&mut self) -> Result<Lined<Expr>, SyntaxError> {
        self.enter(Routine::MultiplicativeExpression, "Starting multiplicative expression");
        let expr = self.fold_binary(&[BinaryOp::Mul, BinaryOp::Div], Self::primary)?;
        self.leave(Routine::MultiplicativeExpression, "Multiplicative expression complete", None);
        Ok(expr)
    }

    /// `operand (op operand)*` with `op` in `ops`, folded to the left.
    fn fold_binary(
        &mut self,
        ops: &[BinaryOp],
        operand: fn(&mut Self) -> Result<Lined<Expr>, SyntaxError>,
    ) -> Result<Lined<Expr>, SyntaxError> {
        let mut left = operand(self)?;
        while let Some((token, op)) = self.binary_op_in(ops) {
            self.log(ParseAction::Operator, || format!("Found operator: {op}"), None, None);
            self.consume(token);
            let right = operand(self)?;
            left = Lined::new(Expr::Binary(Box::new(left), op, Box::new(right)), token.position.line);
            self.node_created(format!("Created binary op: {op}"), left.node.summary(), None);
        }
        Ok(left)
    }

    /// The current token, if it is one of the binary operators in `ops`.
    fn binary_op_in(&self, ops: &[BinaryOp]) -> Option<(&'a Token, BinaryOp)> {
        let token = self.current()?;
        let op = token.operator_id().and_then(BinaryOp::from_operator)?;
        ops.contains(&op).then_some((token, op))
    }

    /// `NUMBER | STRING | IDENTIFIER | '(' Expression ')'`
    fn primary(&mut self) -> Result<Lined<Expr>, SyntaxError> {
        self.enter(Routine::PrimaryExpression, "Starting primary expression");

        let Some(token) = self.current() else {
            return Err(self.end_of_input().with_expected("expression"));
        };
        let line = token.position.line;
        let (node, what) = match token.kind {
            TokenKind::Integer | TokenKind::Float => {
                let kind = if token.kind == TokenKind::Float {
                    NumberKind::Float
                } else {
                    NumberKind::Integer
                };
                let lit = NumberLit {
                    text: token.lexeme.clone(),
                    kind,
                };
                (Expr::Number(lit), "number")
            }
            TokenKind::String => (Expr::String(token.lexeme.clone()), "string"),
            TokenKind::Identifier => (Expr::Identifier(token.lexeme.clone()), "identifier"),
            TokenKind::Delimiter if token.is_delimiter(DelimiterId::LParen) => {
                self.expect_delimiter(DelimiterId::LParen)?;
                let inner = self.expression()?;
                self.expect_delimiter(DelimiterId::RParen)?;
                self.leave(Routine::PrimaryExpression, "Parenthesized expression complete", None);
                return Ok(inner);
            }
            _ => {
                return Err(SyntaxError::new(
                    "Expected number, string, identifier, or '('",
                    line,
                    span_of(token),
                )
                .with_expected("expression")
                .with_found(token.kind.as_str()));
            }
        };

        self.consume(token);
        self.node_created(
            format!("Created {what}: {}", token.lexeme),
            node.summary(),
            Some(Routine::PrimaryExpression),
        );
        Ok(Lined::new(node, line))
    }
}
