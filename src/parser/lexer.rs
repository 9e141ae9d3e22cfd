//! Logos-based lexer for C# declaration sources
//!
//! Fast tokenization using the logos crate. Every byte of input ends up in
//! exactly one token, so the parser can build a lossless tree.

use super::syntax_kind::SyntaxKind;
use logos::Logos;
use rowan::TextSize;

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub offset: TextSize,
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    offset: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            offset: 0,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.offset);
        self.offset += text.len() as u32;

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => SyntaxKind::ERROR,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\x0C]+")]
    Whitespace,

    #[regex(r"\r\n|\n|\r")]
    Newline,

    #[regex(r"///[^\r\n]*", priority = 6, allow_greedy = true)]
    DocComment,

    #[regex(r"//[^\r\n]*", priority = 5, allow_greedy = true)]
    LineComment,

    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    BlockComment,

    #[regex(r"#[ \t]*region[^\r\n]*", priority = 10, allow_greedy = true)]
    RegionStart,

    #[regex(r"#[ \t]*endregion[^\r\n]*", priority = 10, allow_greedy = true)]
    RegionEnd,

    #[regex(r"#[^\r\n]*", priority = 4, allow_greedy = true)]
    Directive,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r"@?[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    #[regex(r"[0-9][0-9A-Za-z_]*(\.[0-9][0-9A-Za-z_]*)?")]
    Number,

    #[regex(r#""([^"\\\r\n]|\\.)*""#)]
    #[regex(r#"\$"([^"\\\r\n]|\\.)*""#)]
    #[regex(r#"(@|\$@|@\$)"([^"]|"")*""#)]
    String,

    #[regex(r"'([^'\\\r\n]|\\.)*'")]
    Char,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token("::")]
    ColonColon,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("=")]
    Eq,
    #[token("=>")]
    FatArrow,
    #[token("?")]
    Question,
    #[token("~")]
    Tilde,

    #[token("==")]
    #[token("!=")]
    #[token("<=")]
    #[token(">=")]
    #[token("&&")]
    #[token("||")]
    #[token("++")]
    #[token("--")]
    #[token("+=")]
    #[token("-=")]
    #[token("*=")]
    #[token("/=")]
    #[token("%=")]
    #[token("&=")]
    #[token("|=")]
    #[token("^=")]
    #[token("??")]
    #[token("??=")]
    #[token("?.")]
    #[token("->")]
    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("/")]
    #[token("%")]
    #[token("&")]
    #[token("|")]
    #[token("^")]
    #[token("!")]
    Operator,

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    #[token("public")]
    PublicKw,
    #[token("private")]
    PrivateKw,
    #[token("protected")]
    ProtectedKw,
    #[token("internal")]
    InternalKw,
    #[token("static")]
    StaticKw,
    #[token("readonly")]
    ReadonlyKw,
    #[token("sealed")]
    SealedKw,
    #[token("abstract")]
    AbstractKw,
    #[token("virtual")]
    VirtualKw,
    #[token("override")]
    OverrideKw,
    #[token("partial")]
    PartialKw,
    #[token("new")]
    NewKw,
    #[token("extern")]
    ExternKw,
    #[token("unsafe")]
    UnsafeKw,
    #[token("async")]
    AsyncKw,
    #[token("const")]
    ConstKw,
    #[token("volatile")]
    VolatileKw,
    #[token("class")]
    ClassKw,
    #[token("struct")]
    StructKw,
    #[token("interface")]
    InterfaceKw,
    #[token("enum")]
    EnumKw,
    #[token("namespace")]
    NamespaceKw,
    #[token("using")]
    UsingKw,
    #[token("delegate")]
    DelegateKw,
    #[token("event")]
    EventKw,
    #[token("operator")]
    OperatorKw,
    #[token("this")]
    ThisKw,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        use LogosToken::*;
        match token {
            // Trivia
            Whitespace => SyntaxKind::WHITESPACE,
            Newline => SyntaxKind::NEWLINE,
            DocComment => SyntaxKind::DOC_COMMENT,
            LineComment => SyntaxKind::LINE_COMMENT,
            BlockComment => SyntaxKind::BLOCK_COMMENT,
            RegionStart => SyntaxKind::REGION_START,
            RegionEnd => SyntaxKind::REGION_END,
            Directive => SyntaxKind::DIRECTIVE,

            // Literals
            Ident => SyntaxKind::IDENT,
            Number => SyntaxKind::NUMBER,
            String => SyntaxKind::STRING,
            Char => SyntaxKind::CHAR,

            // Punctuation
            LBrace => SyntaxKind::L_BRACE,
            RBrace => SyntaxKind::R_BRACE,
            LParen => SyntaxKind::L_PAREN,
            RParen => SyntaxKind::R_PAREN,
            LBracket => SyntaxKind::L_BRACKET,
            RBracket => SyntaxKind::R_BRACKET,
            Lt => SyntaxKind::LT,
            Gt => SyntaxKind::GT,
            Semicolon => SyntaxKind::SEMICOLON,
            Colon => SyntaxKind::COLON,
            ColonColon => SyntaxKind::COLON_COLON,
            Comma => SyntaxKind::COMMA,
            Dot => SyntaxKind::DOT,
            Eq => SyntaxKind::EQ,
            FatArrow => SyntaxKind::FAT_ARROW,
            Question => SyntaxKind::QUESTION,
            Tilde => SyntaxKind::TILDE,
            Operator => SyntaxKind::OPERATOR,

            // Keywords
            PublicKw => SyntaxKind::PUBLIC_KW,
            PrivateKw => SyntaxKind::PRIVATE_KW,
            ProtectedKw => SyntaxKind::PROTECTED_KW,
            InternalKw => SyntaxKind::INTERNAL_KW,
            StaticKw => SyntaxKind::STATIC_KW,
            ReadonlyKw => SyntaxKind::READONLY_KW,
            SealedKw => SyntaxKind::SEALED_KW,
            AbstractKw => SyntaxKind::ABSTRACT_KW,
            VirtualKw => SyntaxKind::VIRTUAL_KW,
            OverrideKw => SyntaxKind::OVERRIDE_KW,
            PartialKw => SyntaxKind::PARTIAL_KW,
            NewKw => SyntaxKind::NEW_KW,
            ExternKw => SyntaxKind::EXTERN_KW,
            UnsafeKw => SyntaxKind::UNSAFE_KW,
            AsyncKw => SyntaxKind::ASYNC_KW,
            ConstKw => SyntaxKind::CONST_KW,
            VolatileKw => SyntaxKind::VOLATILE_KW,
            ClassKw => SyntaxKind::CLASS_KW,
            StructKw => SyntaxKind::STRUCT_KW,
            InterfaceKw => SyntaxKind::INTERFACE_KW,
            EnumKw => SyntaxKind::ENUM_KW,
            NamespaceKw => SyntaxKind::NAMESPACE_KW,
            UsingKw => SyntaxKind::USING_KW,
            DelegateKw => SyntaxKind::DELEGATE_KW,
            EventKw => SyntaxKind::EVENT_KW,
            OperatorKw => SyntaxKind::OPERATOR_KW,
            ThisKw => SyntaxKind::THIS_KW,
        }
    }
}
