//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers resolve a token's lexeme against the `cstep_core::lang` registries so call sites can match on
//! stable IDs instead of spellings.

use cstep_core::lang::delimiters::{self, DelimiterId};
use cstep_core::lang::operators::{self, OperatorId};
use cstep_core::lang::types::DeclTypeId;
use cstep_core::lang::vocabulary::Vocabulary;

use crate::lexer::{Token, TokenKind};

impl Token {
    /// Return the declaration type this keyword introduces under `vocab`.
    ///
    /// Resolved through the vocabulary rather than the global registries, so a parser given the same vocabulary
    /// as the lexer agrees with it on which keywords start a declaration.
    pub fn declaration_type(&self, vocab: &Vocabulary) -> Option<DeclTypeId> {
        match self.kind {
            TokenKind::Keyword => vocab.keyword(&self.lexeme).and_then(|kw| vocab.declaration_type(kw)),
            _ => None,
        }
    }

    /// Return the operator id, if this is an operator token.
    pub fn operator_id(&self) -> Option<OperatorId> {
        match self.kind {
            TokenKind::Operator => operators::from_str(&self.lexeme),
            _ => None,
        }
    }

    /// Return `true` if this is the given operator.
    pub fn is_operator(&self, id: OperatorId) -> bool {
        self.operator_id() == Some(id)
    }

    /// Return the delimiter id, if this is a delimiter token.
    pub fn delimiter_id(&self) -> Option<DelimiterId> {
        match self.kind {
            TokenKind::Delimiter => delimiters::from_str(&self.lexeme),
            _ => None,
        }
    }

    /// Return `true` if this is the given delimiter.
    pub fn is_delimiter(&self, id: DelimiterId) -> bool {
        self.delimiter_id() == Some(id)
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::{Token, TokenKind};
    use crate::stream::Position;
    use cstep_core::lang::delimiters::DelimiterId;
    use cstep_core::lang::operators::OperatorId;
    use cstep_core::lang::types::{DECL_TYPES, DeclTypeId};
    use cstep_core::lang::vocabulary::Vocabulary;
    use cstep_core::lang::{delimiters, keywords, operators};

    fn tok(kind: TokenKind, lexeme: &str) -> Token {
        Token::new(kind, lexeme, Position::default())
    }

    #[test]
    fn test_ids_require_matching_kind() {
        assert_eq!(tok(TokenKind::String, "+").operator_id(), None);
        assert!(tok(TokenKind::Operator, "+").is_operator(OperatorId::Plus));
        assert!(tok(TokenKind::Delimiter, ";").is_delimiter(DelimiterId::Semicolon));
    }

    #[test]
    fn test_declaration_type() {
        let vocab = Vocabulary::c();
        assert_eq!(tok(TokenKind::Keyword, "char").declaration_type(vocab), Some(DeclTypeId::Char));
        assert_eq!(tok(TokenKind::Keyword, "void").declaration_type(vocab), None);
        assert_eq!(tok(TokenKind::Identifier, "int").declaration_type(vocab), None);
    }

    #[test]
    fn test_declaration_type_follows_vocabulary() {
        let floats_only: Vec<_> = DECL_TYPES.iter().copied().filter(|t| t.id == DeclTypeId::Float).collect();
        let vocab = Vocabulary::new(keywords::KEYWORDS, &floats_only, operators::OPERATORS, delimiters::DELIMITERS);
        assert_eq!(tok(TokenKind::Keyword, "int").declaration_type(&vocab), None);
        assert_eq!(tok(TokenKind::Keyword, "float").declaration_type(&vocab), Some(DeclTypeId::Float));
    }
}
