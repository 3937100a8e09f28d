//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance stamped with the lexer's source
//!   name and directory
//!
//! The lexer builds every token through this macro so that all of them share
//! the same reference-counted file metadata.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$lexer` - The lexer producing the token (supplies file metadata)
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$position` - Position of the token's first character
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(lexer, TokenKind::Integer, "42".to_string(), start);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($lexer:expr, $kind:expr, $value:expr, $position:expr) => {
        Token {
            kind: $kind,
            value: $value,
            position: $position,
            file: Rc::clone(&$lexer.file),
            directory: Rc::clone(&$lexer.directory),
        }
    };
}
