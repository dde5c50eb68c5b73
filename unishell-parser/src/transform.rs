//! Transforms [`syntax`](crate::syntax) parse trees into [`ast`] nodes.

use crate::interpolation::{self, Piece};
use crate::syntax::{
    ArgumentTree, CommandTree, ExprCmdTree, ExprTree, FlagTree, NumberTree, ProgramTree,
    StatementTree,
};
use crate::{ParseError, Parser, ast};

/// Walks a parse tree bottom-up, producing AST nodes.
///
/// There is one `visit_*` method per grammar rule that yields a value. String literals
/// are handed to the interpolation engine; their substitution spans are parsed with
/// the same [`Parser`] and transformed recursively.
pub struct Transformer<'a> {
    parser: &'a Parser,
}

impl<'a> Transformer<'a> {
    /// Returns a transformer that uses the given parser for substitutions.
    pub const fn new(parser: &'a Parser) -> Self {
        Self { parser }
    }

    /// Transforms a program, dropping empty statements.
    pub fn visit_program(&self, tree: ProgramTree) -> Result<ast::Program, ParseError> {
        let mut statements = vec![];
        for statement in tree.statements {
            if let Some(node) = self.visit_statement(statement)? {
                statements.push(node);
            }
        }

        Ok(ast::Program { statements })
    }

    /// Transforms a statement; comments are discarded.
    pub fn visit_statement(&self, tree: StatementTree) -> Result<Option<ast::Node>, ParseError> {
        tree.body.map(|body| self.visit_expr_cmd(body)).transpose()
    }

    /// Transforms a command or a standalone expression.
    pub fn visit_expr_cmd(&self, tree: ExprCmdTree) -> Result<ast::Node, ParseError> {
        match tree {
            ExprCmdTree::Command(command) => Ok(self.visit_command(command)?.into()),
            ExprCmdTree::Expr(expr) => self.visit_expr(expr),
        }
    }

    /// Transforms a command, partitioning its flags from its positional arguments.
    pub fn visit_command(&self, tree: CommandTree) -> Result<ast::Command, ParseError> {
        let raw_args = tree
            .args
            .into_iter()
            .map(|arg| self.visit_argument(arg))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ast::Command::new(tree.name, raw_args))
    }

    /// Transforms a single command argument, which may be a flag.
    pub fn visit_argument(&self, tree: ArgumentTree) -> Result<ast::Node, ParseError> {
        match tree {
            ArgumentTree::Flag(flag) => Ok(self.visit_flag(flag).into()),
            ArgumentTree::Expr(expr) => self.visit_expr(expr),
        }
    }

    /// Transforms a flag; flags written in source always carry the default value.
    #[allow(clippy::unused_self)]
    pub fn visit_flag(&self, tree: FlagTree) -> ast::Flag {
        if tree.long {
            ast::Flag::new_long(tree.name)
        } else {
            ast::Flag::new(tree.name)
        }
    }

    /// Transforms an expression.
    pub fn visit_expr(&self, tree: ExprTree) -> Result<ast::Node, ParseError> {
        match tree {
            ExprTree::VarRef(name) => Ok(self.visit_var_ref(name).into()),
            ExprTree::CmdSubst(inner) => self.visit_cmd_subst(*inner),
            ExprTree::QuotedString(raw) => self.visit_quoted_string(&raw),
            ExprTree::BareString(raw) => self.visit_bare_string(&raw),
            ExprTree::Number(number) => Ok(self.visit_number(number).into()),
        }
    }

    /// Transforms `$name` or `${name}` into a variable lookup.
    #[allow(clippy::unused_self)]
    pub fn visit_var_ref(&self, name: String) -> ast::VarLookup {
        ast::VarLookup { name }
    }

    /// Transforms `$( ... )` into the node it wraps.
    pub fn visit_cmd_subst(&self, inner: ExprCmdTree) -> Result<ast::Node, ParseError> {
        self.visit_expr_cmd(inner)
    }

    /// Transforms the contents of a double-quoted string.
    pub fn visit_quoted_string(&self, raw: &str) -> Result<ast::Node, ParseError> {
        self.visit_string(raw)
    }

    /// Transforms an unquoted string token.
    pub fn visit_bare_string(&self, raw: &str) -> Result<ast::Node, ParseError> {
        self.visit_string(raw)
    }

    /// Transforms a numeric literal.
    #[allow(clippy::unused_self)]
    pub fn visit_number(&self, tree: NumberTree) -> ast::Literal {
        match tree {
            NumberTree::Integer(i) => ast::Literal::Integer(i),
            NumberTree::Float(f) => ast::Literal::Float(f),
        }
    }

    /// Splits a string literal into text and substitutions. A literal without
    /// substitutions becomes a plain [`ast::Literal::String`].
    fn visit_string(&self, raw: &str) -> Result<ast::Node, ParseError> {
        let mut parts: Vec<ast::StringPart> = vec![];

        for piece in interpolation::split(raw) {
            match piece {
                Piece::Text(text) => {
                    let text = if self.parser.options().unescape_strings {
                        interpolation::unescape(text)
                    } else {
                        text.into()
                    };

                    if let Some(ast::StringPart::Text(prev)) = parts.last_mut() {
                        prev.push_str(&text);
                    } else {
                        parts.push(ast::StringPart::Text(text.into_owned()));
                    }
                }
                Piece::Substitution(span) => {
                    tracing::debug!(target: "interpolation", "parsing substitution '{span}'");

                    let node = self.parser.parse_expression(span).map_err(|inner| {
                        ParseError::Substitution {
                            text: span.to_owned(),
                            inner: Box::new(inner),
                        }
                    })?;

                    parts.push(ast::StringPart::Node(node));
                }
            }
        }

        if parts
            .iter()
            .all(|part| matches!(part, ast::StringPart::Text(_)))
        {
            let text = parts
                .into_iter()
                .filter_map(|part| match part {
                    ast::StringPart::Text(t) => Some(t),
                    ast::StringPart::Node(_) => None,
                })
                .collect::<String>();

            Ok(ast::Literal::String(text).into())
        } else {
            Ok(ast::Node::InterpolatedString(ast::InterpolatedString { parts }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParserOptions;
    use anyhow::Result;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_string_is_literal() -> Result<()> {
        let node = Parser::default().parse_expression(r#""hello there""#)?;
        assert_eq!(node, ast::Literal::from("hello there").into());
        Ok(())
    }

    #[test]
    fn interpolated_string_parts() -> Result<()> {
        let node = Parser::default().parse_expression(r#""a$x b$(echo hi)""#)?;
        assert_eq!(
            node,
            ast::Node::InterpolatedString(ast::InterpolatedString {
                parts: vec![
                    ast::StringPart::Text("a".into()),
                    ast::StringPart::Node(ast::VarLookup::new("x").into()),
                    ast::StringPart::Text(" b".into()),
                    ast::StringPart::Node(
                        ast::Command::new("echo", vec![ast::Literal::from("hi").into()]).into()
                    ),
                ]
            })
        );
        Ok(())
    }

    #[test]
    fn escapes_follow_options() -> Result<()> {
        let source = r#""a\tb""#;

        let node = Parser::default().parse_expression(source)?;
        assert_eq!(node, ast::Literal::from("a\tb").into());

        let raw = Parser::new(&ParserOptions {
            unescape_strings: false,
            ..ParserOptions::default()
        })
        .parse_expression(source)?;
        assert_eq!(raw, ast::Literal::from(r"a\tb").into());

        Ok(())
    }

    #[test]
    fn bad_substitution_is_reported() {
        let result = Parser::default().parse_expression(r#""$(echo "x")""#);
        assert!(result.is_err());

        let result = Parser::default().parse_expression(r#""$(echo ;)""#);
        assert!(matches!(result, Err(ParseError::Substitution { .. })));
    }
}
