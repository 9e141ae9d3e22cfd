//! Recursive descent parser for C# declaration sources
//!
//! Builds a rowan GreenNode tree from tokens.
//! Supports error recovery and produces a lossless CST.
//!
//! Trivia is attached the way Roslyn attaches it: everything between the
//! previous line break and a declaration's first token is leading trivia
//! inside that declaration's node, and same-line trivia up to and including
//! the line break after its last token is trailing trivia inside it.

use super::lexer::{Lexer, Token};
use super::syntax_kind::SyntaxKind;
use rowan::{GreenNode, GreenNodeBuilder, TextRange, TextSize};

/// Parse result containing the green tree and any errors
#[derive(Debug, Clone)]
pub struct Parse {
    pub green: GreenNode,
    pub errors: Vec<SyntaxError>,
}

impl Parse {
    /// Get the root syntax node
    pub fn syntax(&self) -> super::SyntaxNode {
        super::SyntaxNode::new_root(self.green.clone())
    }

    /// Check if parsing succeeded without errors
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// A syntax error with location and message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    pub range: TextRange,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, range: TextRange) -> Self {
        Self {
            message: message.into(),
            range,
        }
    }
}

/// Parse C# source code into a CST
pub fn parse(input: &str) -> Parse {
    let tokens: Vec<_> = Lexer::new(input).collect();
    let mut parser = Parser::new(&tokens);
    parser.parse_source_file();
    parser.finish()
}

/// Shape of the declaration starting at the current position, decided by lookahead
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DeclShape {
    kind: SyntaxKind,
    /// Token index of the declared identifier, if the declaration has one
    name: Option<usize>,
}

/// The parser state
struct Parser<'a> {
    tokens: &'a [Token<'a>],
    pos: usize,
    builder: GreenNodeBuilder<'static>,
    errors: Vec<SyntaxError>,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token<'a>]) -> Self {
        Self {
            tokens,
            pos: 0,
            builder: GreenNodeBuilder::new(),
            errors: Vec::new(),
        }
    }

    fn finish(self) -> Parse {
        Parse {
            green: self.builder.finish(),
            errors: self.errors,
        }
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    fn kind_at(&self, index: usize) -> Option<SyntaxKind> {
        self.tokens.get(index).map(|t| t.kind)
    }

    fn text_at(&self, index: usize) -> &'a str {
        self.tokens.get(index).map(|t| t.text).unwrap_or("")
    }

    /// Index of the first non-trivia token at or after `index`
    fn skip_trivia_from(&self, mut index: usize) -> usize {
        while self.kind_at(index).is_some_and(SyntaxKind::is_trivia) {
            index += 1;
        }
        index
    }

    /// Index of the next non-trivia token strictly after `index`
    fn next_significant(&self, index: usize) -> usize {
        self.skip_trivia_from(index + 1)
    }

    /// Kind of the current non-trivia token
    fn peek(&self) -> Option<SyntaxKind> {
        self.kind_at(self.skip_trivia_from(self.pos))
    }

    fn at(&self, kind: SyntaxKind) -> bool {
        self.peek() == Some(kind)
    }

    /// Index of the token closing the group opened at `open`, or the last
    /// token when the group is unterminated
    fn matching_close(&self, open: usize) -> usize {
        let Some(open_kind) = self.kind_at(open) else {
            return open;
        };
        let close_kind = match open_kind {
            SyntaxKind::L_PAREN => SyntaxKind::R_PAREN,
            SyntaxKind::L_BRACKET => SyntaxKind::R_BRACKET,
            SyntaxKind::L_BRACE => SyntaxKind::R_BRACE,
            SyntaxKind::LT => SyntaxKind::GT,
            _ => return open,
        };
        let mut depth = 0usize;
        let mut index = open;
        while let Some(kind) = self.kind_at(index) {
            if kind == open_kind {
                depth += 1;
            } else if kind == close_kind {
                depth -= 1;
                if depth == 0 {
                    return index;
                }
            }
            index += 1;
        }
        self.tokens.len().saturating_sub(1)
    }

    /// Index of the token opening the group closed at `close`
    fn matching_open(&self, close: usize) -> Option<usize> {
        let close_kind = self.kind_at(close)?;
        let open_kind = match close_kind {
            SyntaxKind::GT => SyntaxKind::LT,
            SyntaxKind::R_PAREN => SyntaxKind::L_PAREN,
            SyntaxKind::R_BRACKET => SyntaxKind::L_BRACKET,
            _ => return None,
        };
        let mut depth = 0usize;
        let mut index = close;
        loop {
            let kind = self.kind_at(index)?;
            if kind == close_kind {
                depth += 1;
            } else if kind == open_kind {
                depth -= 1;
                if depth == 0 {
                    return Some(index);
                }
            }
            index = index.checked_sub(1)?;
        }
    }

    /// Index of the non-trivia token before `index`
    fn prev_significant(&self, index: usize) -> Option<usize> {
        let mut index = index.checked_sub(1)?;
        while self.kind_at(index)?.is_trivia() {
            index = index.checked_sub(1)?;
        }
        Some(index)
    }

    /// The identifier naming a method-like declaration whose parameter list
    /// opens at `paren`, skipping generic parameters (`Foo<T>(`)
    fn ident_before(&self, paren: usize) -> Option<(usize, bool)> {
        let mut index = self.prev_significant(paren)?;
        let mut generic = false;
        if self.kind_at(index) == Some(SyntaxKind::GT) {
            let open = self.matching_open(index)?;
            index = self.prev_significant(open)?;
            generic = true;
        }
        (self.kind_at(index) == Some(SyntaxKind::IDENT)).then_some((index, generic))
    }

    fn current_range(&self) -> TextRange {
        let index = self.skip_trivia_from(self.pos);
        match self.tokens.get(index).or_else(|| self.tokens.last()) {
            Some(token) => TextRange::at(token.offset, TextSize::of(token.text)),
            None => TextRange::empty(TextSize::new(0)),
        }
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    /// Add the current token to the tree and advance
    fn bump(&mut self) {
        if let Some(token) = self.tokens.get(self.pos) {
            self.builder.token(token.kind.into(), token.text);
            self.pos += 1;
        }
    }

    /// Add all trivia at the current position
    fn bump_trivia(&mut self) {
        while self.kind_at(self.pos).is_some_and(SyntaxKind::is_trivia) {
            self.bump();
        }
    }

    /// Add trivia followed by the next significant token
    fn bump_significant(&mut self) {
        self.bump_trivia();
        self.bump();
    }

    /// Add same-line whitespace and comments, then the line break ending the line
    fn bump_trailing_trivia(&mut self) {
        let mut index = self.pos;
        while matches!(
            self.kind_at(index),
            Some(SyntaxKind::WHITESPACE | SyntaxKind::LINE_COMMENT | SyntaxKind::BLOCK_COMMENT)
        ) {
            index += 1;
        }
        match self.kind_at(index) {
            Some(SyntaxKind::NEWLINE) => index += 1,
            // Same-line trivia before another token on this line stays leading trivia
            Some(_) => return,
            None => {}
        }
        while self.pos < index {
            self.bump();
        }
    }

    /// Add significant tokens up to and including `last`
    fn bump_through(&mut self, last: usize) {
        while self.pos <= last && self.pos < self.tokens.len() {
            self.bump();
        }
    }

    fn error(&mut self, message: impl Into<String>) {
        let range = self.current_range();
        self.errors.push(SyntaxError::new(message, range));
    }

    // =========================================================================
    // Source file and namespaces
    // =========================================================================

    fn parse_source_file(&mut self) {
        self.builder.start_node(SyntaxKind::SOURCE_FILE.into());
        self.parse_namespace_items();
        self.bump_trivia();
        while self.pos < self.tokens.len() {
            // Stray closing braces at file level
            self.error("unexpected '}'");
            self.builder.start_node(SyntaxKind::ERROR.into());
            self.bump_significant();
            self.builder.finish_node();
            self.parse_namespace_items();
            self.bump_trivia();
        }
        self.builder.finish_node();
    }

    /// Parse usings, namespaces and type declarations until `}` or end of input
    fn parse_namespace_items(&mut self) {
        loop {
            match self.peek() {
                None => break,
                Some(SyntaxKind::R_BRACE) => break,
                Some(SyntaxKind::USING_KW) => self.parse_using_directive(),
                Some(SyntaxKind::NAMESPACE_KW) => self.parse_namespace(),
                Some(_) => {
                    let shape = self.classify_declaration();
                    match shape.kind {
                        SyntaxKind::TYPE_DECL => self.parse_type_decl(),
                        SyntaxKind::DELEGATE_DECL => self.parse_member(shape),
                        _ if self.at(SyntaxKind::L_BRACKET) => self.parse_standalone_attributes(),
                        _ => self.parse_error_item(),
                    }
                }
            }
        }
    }

    fn parse_using_directive(&mut self) {
        self.builder.start_node(SyntaxKind::USING_DIRECTIVE.into());
        self.bump_significant(); // using
        while let Some(kind) = self.peek() {
            if matches!(kind, SyntaxKind::R_BRACE | SyntaxKind::L_BRACE) {
                break;
            }
            self.bump_significant();
            if kind == SyntaxKind::SEMICOLON {
                break;
            }
        }
        self.bump_trailing_trivia();
        self.builder.finish_node();
    }

    fn parse_namespace(&mut self) {
        self.builder.start_node(SyntaxKind::NAMESPACE_DECL.into());
        self.bump_significant(); // namespace

        self.builder.start_node(SyntaxKind::NAME.into());
        while matches!(self.peek(), Some(SyntaxKind::IDENT | SyntaxKind::DOT)) {
            self.bump_significant();
        }
        self.builder.finish_node();

        match self.peek() {
            Some(SyntaxKind::SEMICOLON) => {
                // File-scoped namespace: the rest of the file is its body
                self.bump_significant();
                self.bump_trailing_trivia();
                self.builder.start_node(SyntaxKind::NAMESPACE_BODY.into());
                self.parse_namespace_items();
                self.builder.finish_node();
            }
            Some(SyntaxKind::L_BRACE) => {
                self.builder.start_node(SyntaxKind::NAMESPACE_BODY.into());
                self.bump_significant();
                self.bump_trailing_trivia();
                self.parse_namespace_items();
                self.bump_trivia();
                if self.at(SyntaxKind::R_BRACE) {
                    self.bump();
                } else {
                    self.error("expected '}' to close namespace");
                }
                self.builder.finish_node();
            }
            _ => self.error("expected '{' or ';' after namespace name"),
        }

        self.bump_trailing_trivia();
        self.builder.finish_node();
    }

    /// Assembly-level attributes such as `[assembly: ComVisible(false)]`
    fn parse_standalone_attributes(&mut self) {
        self.builder.start_node(SyntaxKind::ATTRIBUTE_LIST.into());
        self.bump_trivia();
        let close = self.matching_close(self.pos);
        self.bump_through(close);
        self.bump_trailing_trivia();
        self.builder.finish_node();
    }

    /// Anything that is not a declaration: consume it as one error item
    fn parse_error_item(&mut self) {
        self.error("expected a type or namespace declaration");
        self.builder.start_node(SyntaxKind::ERROR.into());
        self.bump_trivia();
        self.parse_declaration_rest(None);
        self.bump_trailing_trivia();
        self.builder.finish_node();
    }

    // =========================================================================
    // Declaration classification
    // =========================================================================

    /// Decide what the declaration at the current position is without consuming it
    fn classify_declaration(&self) -> DeclShape {
        let unknown = DeclShape {
            kind: SyntaxKind::UNKNOWN_MEMBER,
            name: None,
        };
        let mut index = self.skip_trivia_from(self.pos);

        while self.kind_at(index) == Some(SyntaxKind::L_BRACKET) {
            index = self.next_significant(self.matching_close(index));
        }

        let mut first_non_modifier: Option<usize> = None;
        let mut last_ident: Option<usize> = None;
        let mut is_delegate = false;
        let mut is_event = false;

        while let Some(kind) = self.kind_at(index) {
            if !kind.is_modifier() && first_non_modifier.is_none() {
                first_non_modifier = Some(index);
            }
            match kind {
                SyntaxKind::R_BRACE | SyntaxKind::NAMESPACE_KW | SyntaxKind::USING_KW => {
                    return unknown;
                }
                k if k.is_modifier() => {}
                k if k.is_type_keyword() => {
                    return DeclShape {
                        kind: SyntaxKind::TYPE_DECL,
                        name: None,
                    };
                }
                SyntaxKind::IDENT if self.is_record_keyword(index) => {
                    return DeclShape {
                        kind: SyntaxKind::TYPE_DECL,
                        name: None,
                    };
                }
                SyntaxKind::DELEGATE_KW => is_delegate = true,
                SyntaxKind::EVENT_KW => is_event = true,
                SyntaxKind::OPERATOR_KW => {
                    return DeclShape {
                        kind: SyntaxKind::OPERATOR_DECL,
                        name: None,
                    };
                }
                SyntaxKind::TILDE => {
                    let next = self.next_significant(index);
                    return DeclShape {
                        kind: SyntaxKind::DESTRUCTOR,
                        name: (self.kind_at(next) == Some(SyntaxKind::IDENT)).then_some(next),
                    };
                }
                SyntaxKind::THIS_KW
                    if self.kind_at(self.next_significant(index))
                        == Some(SyntaxKind::L_BRACKET) =>
                {
                    return DeclShape {
                        kind: SyntaxKind::INDEXER,
                        name: None,
                    };
                }
                SyntaxKind::L_PAREN => {
                    let name = self.ident_before(index);
                    let kind = if is_delegate {
                        SyntaxKind::DELEGATE_DECL
                    } else {
                        match name {
                            Some((ident, false)) if Some(ident) == first_non_modifier => {
                                SyntaxKind::CONSTRUCTOR
                            }
                            Some(_) => SyntaxKind::METHOD,
                            None => SyntaxKind::UNKNOWN_MEMBER,
                        }
                    };
                    return DeclShape {
                        kind,
                        name: name.map(|(ident, _)| ident),
                    };
                }
                SyntaxKind::L_BRACE | SyntaxKind::FAT_ARROW => {
                    if last_ident.is_none() {
                        return unknown;
                    }
                    return DeclShape {
                        kind: if is_event {
                            SyntaxKind::EVENT
                        } else {
                            SyntaxKind::PROPERTY
                        },
                        name: last_ident,
                    };
                }
                SyntaxKind::EQ | SyntaxKind::SEMICOLON | SyntaxKind::COMMA => {
                    if last_ident.is_none() {
                        return unknown;
                    }
                    return DeclShape {
                        kind: if is_event {
                            SyntaxKind::EVENT
                        } else {
                            SyntaxKind::FIELD
                        },
                        name: last_ident,
                    };
                }
                SyntaxKind::LT | SyntaxKind::L_BRACKET => {
                    index = self.matching_close(index);
                }
                SyntaxKind::IDENT => last_ident = Some(index),
                _ => {}
            }
            index = self.next_significant(index);
        }
        unknown
    }

    /// `record` is contextual: it starts a type only when followed by a name
    /// and a declaration-shaped token, or by `class`/`struct`
    fn is_record_keyword(&self, index: usize) -> bool {
        if self.text_at(index) != "record" {
            return false;
        }
        let next = self.next_significant(index);
        match self.kind_at(next) {
            Some(SyntaxKind::CLASS_KW | SyntaxKind::STRUCT_KW) => true,
            Some(SyntaxKind::IDENT) => matches!(
                self.kind_at(self.next_significant(next)),
                Some(
                    SyntaxKind::L_PAREN
                        | SyntaxKind::L_BRACE
                        | SyntaxKind::COLON
                        | SyntaxKind::LT
                )
            ),
            _ => false,
        }
    }

    // =========================================================================
    // Type declarations
    // =========================================================================

    fn parse_type_decl(&mut self) {
        self.builder.start_node(SyntaxKind::TYPE_DECL.into());
        self.bump_trivia();

        self.parse_attribute_lists();

        while self.peek().is_some_and(SyntaxKind::is_modifier) {
            self.bump_significant();
        }

        // Type keyword (`class`, `struct`, `interface`, `enum`, `record [class|struct]`)
        let is_enum = self.at(SyntaxKind::ENUM_KW);
        if self.peek() == Some(SyntaxKind::IDENT) {
            self.bump_significant(); // record
            if matches!(self.peek(), Some(SyntaxKind::CLASS_KW | SyntaxKind::STRUCT_KW)) {
                self.bump_significant();
            }
        } else {
            self.bump_significant();
        }

        if self.at(SyntaxKind::IDENT) {
            self.bump_trivia();
            self.builder.start_node(SyntaxKind::NAME.into());
            self.bump();
            self.builder.finish_node();
        } else {
            self.error("expected type name");
        }

        // Type parameters and primary constructor parameters
        if self.at(SyntaxKind::LT) {
            self.bump_trivia();
            let close = self.matching_close(self.pos);
            self.bump_through(close);
        }
        if self.at(SyntaxKind::L_PAREN) {
            self.bump_trivia();
            let close = self.matching_close(self.pos);
            self.bump_through(close);
        }

        if self.at(SyntaxKind::COLON) {
            self.parse_base_list();
        }

        // Constraint clauses (`where T : new()`)
        while let Some(kind) = self.peek() {
            if matches!(
                kind,
                SyntaxKind::L_BRACE | SyntaxKind::SEMICOLON | SyntaxKind::R_BRACE
            ) {
                break;
            }
            self.bump_significant();
        }

        match self.peek() {
            Some(SyntaxKind::L_BRACE) if is_enum => {
                self.bump_trivia();
                self.parse_block();
            }
            Some(SyntaxKind::L_BRACE) => self.parse_type_body(),
            Some(SyntaxKind::SEMICOLON) => self.bump_significant(),
            _ => self.error("expected type body"),
        }
        self.bump_same_line_semicolon();

        self.bump_trailing_trivia();
        self.builder.finish_node();
    }

    fn parse_attribute_lists(&mut self) {
        while self.at(SyntaxKind::L_BRACKET) {
            self.bump_trivia();
            self.builder.start_node(SyntaxKind::ATTRIBUTE_LIST.into());
            let close = self.matching_close(self.pos);
            self.bump_through(close);
            self.builder.finish_node();
        }
    }

    fn parse_base_list(&mut self) {
        self.builder.start_node(SyntaxKind::BASE_LIST.into());
        self.bump_significant(); // :
        loop {
            self.bump_trivia();
            self.builder.start_node(SyntaxKind::TYPE_REF.into());
            self.parse_type_ref_tokens();
            self.builder.finish_node();
            if self.at(SyntaxKind::COMMA) {
                self.bump_significant();
            } else {
                break;
            }
        }
        self.builder.finish_node();
    }

    /// A possibly qualified, generic, nullable or array type reference
    fn parse_type_ref_tokens(&mut self) {
        let mut consumed = false;
        while let Some(kind) = self.peek() {
            match kind {
                SyntaxKind::IDENT if self.text_at(self.skip_trivia_from(self.pos)) == "where" => {
                    break;
                }
                SyntaxKind::IDENT
                | SyntaxKind::DOT
                | SyntaxKind::COLON_COLON
                | SyntaxKind::QUESTION => {
                    self.bump_significant();
                    consumed = true;
                }
                SyntaxKind::LT | SyntaxKind::L_BRACKET | SyntaxKind::L_PAREN => {
                    // Generic arguments, array ranks, record base arguments
                    self.bump_trivia();
                    let close = self.matching_close(self.pos);
                    self.bump_through(close);
                    consumed = true;
                }
                _ => break,
            }
        }
        if !consumed {
            self.error("expected base type");
        }
    }

    fn parse_type_body(&mut self) {
        self.builder.start_node(SyntaxKind::TYPE_BODY.into());
        self.bump_significant(); // {
        self.bump_trailing_trivia();

        loop {
            match self.peek() {
                None | Some(SyntaxKind::R_BRACE) => break,
                Some(_) => {
                    let shape = self.classify_declaration();
                    if shape.kind == SyntaxKind::TYPE_DECL {
                        self.parse_type_decl();
                    } else {
                        self.parse_member(shape);
                    }
                }
            }
        }

        self.bump_trivia();
        if self.at(SyntaxKind::R_BRACE) {
            self.bump();
        } else {
            self.error("expected '}' to close type body");
        }
        self.builder.finish_node();
    }

    // =========================================================================
    // Members
    // =========================================================================

    fn parse_member(&mut self, shape: DeclShape) {
        self.builder.start_node(shape.kind.into());
        self.bump_trivia();
        self.parse_attribute_lists();
        self.parse_declaration_rest(shape.name);
        self.bump_trailing_trivia();
        self.builder.finish_node();
    }

    /// Consume a declaration up to its terminating `;` or body block.
    /// Callers only enter here when the next significant token is not `}`,
    /// so at least one token is consumed.
    fn parse_declaration_rest(&mut self, name: Option<usize>) {
        let mut depth = 0usize;
        let mut in_initializer = false;

        loop {
            let index = self.skip_trivia_from(self.pos);
            let Some(kind) = self.kind_at(index) else {
                break;
            };
            match kind {
                SyntaxKind::R_BRACE if depth == 0 => break,
                SyntaxKind::SEMICOLON if depth == 0 => {
                    self.bump_significant();
                    break;
                }
                SyntaxKind::L_BRACE if depth == 0 && !in_initializer => {
                    self.bump_trivia();
                    self.parse_block();
                    if self.at(SyntaxKind::EQ) {
                        // Property initializer: `{ get; set; } = value;`
                        continue;
                    }
                    self.bump_same_line_semicolon();
                    break;
                }
                SyntaxKind::L_BRACE => {
                    self.bump_trivia();
                    self.parse_block();
                }
                SyntaxKind::EQ | SyntaxKind::FAT_ARROW if depth == 0 => {
                    in_initializer = true;
                    self.bump_significant();
                }
                SyntaxKind::L_PAREN | SyntaxKind::L_BRACKET => {
                    depth += 1;
                    self.bump_significant();
                }
                SyntaxKind::R_PAREN | SyntaxKind::R_BRACKET => {
                    depth = depth.saturating_sub(1);
                    self.bump_significant();
                }
                SyntaxKind::IDENT if Some(index) == name => {
                    self.bump_trivia();
                    self.builder.start_node(SyntaxKind::NAME.into());
                    self.bump();
                    self.builder.finish_node();
                }
                _ => self.bump_significant(),
            }
        }
    }

    /// A `;` directly after a closing brace on the same line (`};`)
    fn bump_same_line_semicolon(&mut self) {
        let mut index = self.pos;
        while self.kind_at(index) == Some(SyntaxKind::WHITESPACE) {
            index += 1;
        }
        if self.kind_at(index) == Some(SyntaxKind::SEMICOLON) {
            self.bump_through(index);
        }
    }

    /// A balanced `{ ... }` block; statements inside are kept as flat tokens
    fn parse_block(&mut self) {
        self.builder.start_node(SyntaxKind::BLOCK.into());
        self.bump(); // {
        loop {
            match self.kind_at(self.pos) {
                None => {
                    self.error("unclosed '{'");
                    break;
                }
                Some(SyntaxKind::L_BRACE) => self.parse_block(),
                Some(SyntaxKind::R_BRACE) => {
                    self.bump();
                    break;
                }
                Some(_) => self.bump(),
            }
        }
        self.builder.finish_node();
    }
}
