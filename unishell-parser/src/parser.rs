use crate::syntax::{
    ArgumentTree, CommandTree, ExprCmdTree, ExprTree, FlagTree, NumberTree, ProgramTree,
    StatementTree,
};
use crate::transform::Transformer;
use crate::{ParseError, ast, error};

/// Default limit on how deeply `$( ... )` substitutions may nest in source text.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 100;

/// Options used to control the behavior of the parser.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ParserOptions {
    /// Whether or not to process backslash escapes in the text of string literals.
    pub unescape_strings: bool,
    /// Maximum nesting of `$( ... )` substitutions; deeper input is rejected before the
    /// grammar runs.
    pub max_nesting_depth: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            unescape_strings: true,
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}

/// Identifies the grammar rule that parsing starts from.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum StartRule {
    /// A full program: separated statements through end of input.
    Program,
    /// A single command or expression, optionally surrounded by blanks.
    Expression,
}

/// The result of matching source text against the grammar, before transformation.
#[derive(Clone, Debug, PartialEq)]
pub enum ParseTree {
    /// Produced by [`StartRule::Program`].
    Program(ProgramTree),
    /// Produced by [`StartRule::Expression`].
    Expression(ExprCmdTree),
}

/// Implements parsing for unishell source text.
///
/// A parser holds no state beyond its options; the grammar itself is generated at build
/// time, so parsers are cheap to create and clone.
#[derive(Clone, Debug, Default)]
pub struct Parser {
    options: ParserOptions,
}

impl Parser {
    /// Returns a new parser instance.
    ///
    /// # Arguments
    ///
    /// * `options` - The options to use when parsing.
    pub fn new(options: &ParserOptions) -> Self {
        Self {
            options: options.clone(),
        }
    }

    /// Returns the options used by this parser.
    pub const fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Matches the source text against the grammar, returning the raw parse tree.
    ///
    /// # Arguments
    ///
    /// * `source` - The text to parse.
    /// * `start` - The rule to start parsing from.
    pub fn parse_tree(&self, source: &str, start: StartRule) -> Result<ParseTree, ParseError> {
        self.check_nesting(source)?;

        match start {
            StartRule::Program => {
                parse_result_to_error(unishell_grammar::program(source)).map(ParseTree::Program)
            }
            StartRule::Expression => parse_result_to_error(unishell_grammar::expression(source))
                .map(ParseTree::Expression),
        }
    }

    /// Parses the source text into an abstract syntax tree (AST) of a program.
    ///
    /// # Arguments
    ///
    /// * `source` - The program text.
    pub fn parse_program(&self, source: &str) -> Result<ast::Program, ParseError> {
        self.check_nesting(source)?;
        let tree = parse_result_to_error(unishell_grammar::program(source))?;
        Transformer::new(self).visit_program(tree)
    }

    /// Parses the source text as a single command or expression.
    ///
    /// # Arguments
    ///
    /// * `source` - The expression text.
    pub fn parse_expression(&self, source: &str) -> Result<ast::Node, ParseError> {
        self.check_nesting(source)?;
        let tree = parse_result_to_error(unishell_grammar::expression(source))?;
        Transformer::new(self).visit_expr_cmd(tree)
    }

    /// Rejects source whose substitutions nest more deeply than the configured limit.
    /// Parentheses count toward the depth once inside a `$(`, matching how the grammar and
    /// the interpolation splitter recurse.
    fn check_nesting(&self, source: &str) -> Result<(), ParseError> {
        let limit = self.options.max_nesting_depth;
        let mut depth = 0usize;
        let mut line = 1;
        let mut column = 0;
        let mut chars = source.chars().peekable();

        while let Some(c) = chars.next() {
            column += 1;
            let start_column = column;

            let opens = match c {
                '$' if chars.peek() == Some(&'(') => {
                    chars.next();
                    column += 1;
                    true
                }
                '(' => depth > 0,
                ')' => {
                    depth = depth.saturating_sub(1);
                    false
                }
                '\n' => {
                    line += 1;
                    column = 0;
                    false
                }
                _ => false,
            };

            if opens {
                depth += 1;
                if depth > limit {
                    tracing::debug!(target: "parse", "nesting limit {limit} exceeded");
                    return Err(ParseError::NestingTooDeep {
                        line,
                        column: start_column,
                        limit,
                    });
                }
            }
        }

        Ok(())
    }
}

fn parse_result_to_error<R>(
    parse_result: Result<R, peg::error::ParseError<peg::str::LineCol>>,
) -> Result<R, ParseError>
where
    R: std::fmt::Debug,
{
    match parse_result {
        Ok(tree) => {
            tracing::debug!(target: "parse", "TREE: {:?}", tree);
            Ok(tree)
        }
        Err(parse_error) => {
            tracing::debug!(target: "parse", "Parse error: {:?}", parse_error);
            Err(error::convert_peg_parse_error(&parse_error))
        }
    }
}

peg::parser! {
    grammar unishell_grammar() for str {
        pub(crate) rule program() -> ProgramTree =
            statements:statement() ** statement_sep() ![_] { ProgramTree { statements } }

        pub(crate) rule expression() -> ExprCmdTree =
            ws()? e:expr_cmd() ws()? ![_] { e }

        rule statement_sep() =
            "\r"? "\n" / ";"

        rule statement() -> StatementTree =
            ws()? body:expr_cmd()? ws()? comment:comment()? ws()? { StatementTree { body, comment } }

        rule comment() -> String =
            "#" c:$([^ '\n' | '\r']*) { c.to_owned() }

        rule expr_cmd() -> ExprCmdTree =
            c:command() { ExprCmdTree::Command(c) } /
            e:expr() { ExprCmdTree::Expr(e) }

        rule command() -> CommandTree =
            name:identifier() args:(ws() a:argument() { a })* {
                CommandTree { name: name.to_owned(), args }
            }

        rule argument() -> ArgumentTree =
            f:flag() { ArgumentTree::Flag(f) } /
            e:expr() { ArgumentTree::Expr(e) }

        rule flag() -> FlagTree =
            "--" name:identifier() { FlagTree { name: name.to_owned(), long: true } } /
            "-" name:identifier() { FlagTree { name: name.to_owned(), long: false } }

        rule expr() -> ExprTree =
            v:var_ref() { ExprTree::VarRef(v.to_owned()) } /
            c:cmd_subst() { ExprTree::CmdSubst(Box::new(c)) } /
            s:quoted_string() { ExprTree::QuotedString(s.to_owned()) } /
            s:bare_string() { ExprTree::BareString(s.to_owned()) } /
            n:number() { ExprTree::Number(n) }

        rule var_ref() -> &'input str =
            "${" name:identifier() "}" { name } /
            "$" name:identifier() { name }

        rule cmd_subst() -> ExprCmdTree =
            "$(" ws()? e:expr_cmd() ws()? ")" { e }

        rule quoted_string() -> &'input str =
            "\"" s:$([^ '"']*) "\"" { s }

        rule bare_string() -> &'input str =
            quiet!{$(bare_string_start_char() bare_string_char()*)} / expected!("string")

        rule bare_string_start_char() =
            ['a'..='z' | 'A'..='Z' | '_' | '.' | ':' | '*' | '?' | '/' | '@' | '~' | '{' | '}']

        rule bare_string_char() =
            ['a'..='z' | 'A'..='Z' | '0'..='9' | '_' | '.' | ':' | '*' | '?' | '/' | '@' | '~' | '{' | '}']

        rule number() -> NumberTree =
            s:$(sign()? digits() "." digits() exponent()?) {?
                s.parse().map(NumberTree::Float).or(Err("float"))
            } /
            s:$(sign()? digits()) {?
                s.parse().map(NumberTree::Integer).or(Err("integer"))
            }

        rule sign() = ['+' | '-']

        rule digits() = ['0'..='9']+

        rule exponent() = ['e' | 'E'] sign()? digits()

        rule identifier() -> &'input str =
            quiet!{$(['a'..='z' | 'A'..='Z' | '_'] ['a'..='z' | 'A'..='Z' | '0'..='9' | '_']*)} /
            expected!("identifier")

        rule ws() = quiet!{[' ' | '\t']+}
    }
}
