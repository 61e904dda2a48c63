//! Tokenization of path data into commands.
//!
//! The path data is cut into runs, each starting at a command letter and
//! extending up to the next one. The text following the letter is the
//! command's argument list.

use core::fmt;

/// The drawing commands of the path data grammar.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CommandKind {
    MoveTo,
    LineTo,
    HorizontalLineTo,
    VerticalLineTo,
    CubicTo,
    SmoothCubicTo,
    QuadraticTo,
    SmoothQuadraticTo,
    Arc,
    Close,
}

impl CommandKind {
    /// Returns the command and whether it is relative.
    pub fn from_letter(letter: char) -> Option<(CommandKind, bool)> {
        let kind = match letter.to_ascii_uppercase() {
            'M' => CommandKind::MoveTo,
            'L' => CommandKind::LineTo,
            'H' => CommandKind::HorizontalLineTo,
            'V' => CommandKind::VerticalLineTo,
            'C' => CommandKind::CubicTo,
            'S' => CommandKind::SmoothCubicTo,
            'Q' => CommandKind::QuadraticTo,
            'T' => CommandKind::SmoothQuadraticTo,
            'A' => CommandKind::Arc,
            'Z' => CommandKind::Close,
            _ => {
                return None;
            }
        };

        Some((kind, letter.is_ascii_lowercase()))
    }

    /// Size of one argument group.
    pub fn num_arguments(self) -> usize {
        match self {
            CommandKind::MoveTo | CommandKind::LineTo | CommandKind::SmoothQuadraticTo => 2,
            CommandKind::HorizontalLineTo | CommandKind::VerticalLineTo => 1,
            CommandKind::CubicTo => 6,
            CommandKind::SmoothCubicTo | CommandKind::QuadraticTo => 4,
            CommandKind::Arc => 7,
            CommandKind::Close => 0,
        }
    }

    /// The command an extra argument group repeats as.
    ///
    /// Coordinates following a move-to are implicit line-tos.
    pub fn repeated(self) -> CommandKind {
        match self {
            CommandKind::MoveTo => CommandKind::LineTo,
            other => other,
        }
    }
}

#[inline]
pub fn is_command_letter(c: char) -> bool {
    CommandKind::from_letter(c).is_some()
}

/// One command letter and the raw text of its arguments.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Token<'l> {
    /// Byte offset of the command letter in the tokenized string.
    pub offset: usize,
    pub letter: char,
    pub arguments: &'l str,
}

impl<'l> Token<'l> {
    #[inline]
    pub fn kind(&self) -> CommandKind {
        // Tokens are only created at command letters.
        CommandKind::from_letter(self.letter)
            .map(|(kind, _)| kind)
            .unwrap_or(CommandKind::Close)
    }

    #[inline]
    pub fn is_relative(&self) -> bool {
        self.letter.is_ascii_lowercase()
    }
}

impl<'l> fmt::Display for Token<'l> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.letter, self.arguments)
    }
}

/// Iterator over the command runs of a path data string.
///
/// Text before the first command letter is not part of any token, see
/// [`Tokens::leading`].
///
/// ## Example
///
/// ```
/// use svg_points_path::commands::{tokenize, CommandKind};
///
/// let kinds: Vec<CommandKind> = tokenize("M 0 0 L 10,10 z").map(|t| t.kind()).collect();
/// assert_eq!(kinds, vec![CommandKind::MoveTo, CommandKind::LineTo, CommandKind::Close]);
/// ```
#[derive(Clone, Debug)]
pub struct Tokens<'l> {
    src: &'l str,
    position: usize,
}

pub fn tokenize(src: &str) -> Tokens {
    Tokens {
        position: src.find(is_command_letter).unwrap_or(src.len()),
        src,
    }
}

impl<'l> Tokens<'l> {
    /// The text preceding the first command letter.
    pub fn leading(&self) -> &'l str {
        let end = self.src.find(is_command_letter).unwrap_or(self.src.len());
        &self.src[..end]
    }
}

impl<'l> Iterator for Tokens<'l> {
    type Item = Token<'l>;

    fn next(&mut self) -> Option<Token<'l>> {
        let rest = &self.src[self.position..];
        let letter = rest.chars().next()?;
        let args_start = letter.len_utf8();
        let args_end = rest[args_start..]
            .find(is_command_letter)
            .map(|i| i + args_start)
            .unwrap_or(rest.len());

        let token = Token {
            offset: self.position,
            letter,
            arguments: &rest[args_start..args_end],
        };

        self.position += args_end;

        Some(token)
    }
}

#[test]
fn simple_tokens() {
    let tokens: Vec<Token> = tokenize("M10 10L20,20 h5v-5Z").collect();
    assert_eq!(tokens.len(), 5);
    assert_eq!(tokens[0].letter, 'M');
    assert_eq!(tokens[0].arguments, "10 10");
    assert_eq!(tokens[1].arguments, "20,20 ");
    assert_eq!(tokens[2].kind(), CommandKind::HorizontalLineTo);
    assert!(tokens[2].is_relative());
    assert_eq!(tokens[3].arguments, "-5");
    assert_eq!(tokens[4].kind(), CommandKind::Close);
    assert_eq!(tokens[4].arguments, "");
    assert_eq!(tokens[1].offset, 6);
}

#[test]
fn leading_text() {
    let tokens = tokenize("  10 10 L 5 5");
    assert_eq!(tokens.leading(), "  10 10 ");
    assert_eq!(tokens.count(), 1);

    assert_eq!(tokenize("").count(), 0);
    assert_eq!(tokenize("   ").count(), 0);
}

#[test]
fn unknown_letters_stay_in_arguments() {
    // Exponents and stray letters are not command letters.
    let tokens: Vec<Token> = tokenize("M 1e2 x3 B").collect();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].arguments, " 1e2 x3 B");
}

#[test]
fn argument_group_sizes() {
    assert_eq!(CommandKind::from_letter('c'), Some((CommandKind::CubicTo, true)));
    assert_eq!(CommandKind::from_letter('T'), Some((CommandKind::SmoothQuadraticTo, false)));
    assert_eq!(CommandKind::from_letter('x'), None);
    assert_eq!(CommandKind::CubicTo.num_arguments(), 6);
    assert_eq!(CommandKind::Arc.num_arguments(), 7);
    assert_eq!(CommandKind::MoveTo.repeated(), CommandKind::LineTo);
}
