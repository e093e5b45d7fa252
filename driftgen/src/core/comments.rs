//! Split C-family source text into executable code and comment text.
//!
//! String and character literals are kept in the code projection so that
//! comment delimiters inside them (`"http://"`, `"/*"`) are not mistaken for
//! comments. Every comment collapses to a single space in the code projection.

/// Code and comment text of a source file, separated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    pub code: String,
    pub comments: String,
}

pub fn project(source: &str) -> Projection {
    let bytes = source.as_bytes();
    let mut code = String::with_capacity(source.len());
    let mut comments = String::new();
    let mut run_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                let end = source[i..].find('\n').map_or(bytes.len(), |off| i + off);
                code.push_str(&source[run_start..i]);
                code.push(' ');
                push_comment(&mut comments, &source[i..end]);
                i = end;
                run_start = end;
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                let end = source[i + 2..]
                    .find("*/")
                    .map_or(bytes.len(), |off| i + 2 + off + 2);
                code.push_str(&source[run_start..i]);
                code.push(' ');
                push_comment(&mut comments, &source[i..end]);
                i = end;
                run_start = end;
            }
            quote @ (b'"' | b'\'') => i = skip_literal(bytes, i, quote),
            _ => i += 1,
        }
    }
    code.push_str(&source[run_start..]);

    Projection { code, comments }
}

fn push_comment(comments: &mut String, text: &str) {
    if !comments.is_empty() {
        comments.push('\n');
    }
    comments.push_str(text);
}

/// Return the index just past the literal opened at `start`.
///
/// Unterminated literals end at the line break.
fn skip_literal(bytes: &[u8], start: usize, quote: u8) -> usize {
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'\n' => return i,
            b if b == quote => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separates_javadoc_from_code() {
        let source = "/**\n * Adds two integers.\n */\npublic int add(int a, int b) {\n    return a + b; // sum\n}\n";
        let projection = project(source);
        assert_eq!(
            projection.code,
            " \npublic int add(int a, int b) {\n    return a + b;  \n}\n"
        );
        assert_eq!(
            projection.comments,
            "/**\n * Adds two integers.\n */\n// sum"
        );
    }

    #[test]
    fn comment_markers_inside_literals_stay_code() {
        let source = r#"String url = "http://x/*y*/"; char c = '/'; // tail"#;
        let projection = project(source);
        assert_eq!(
            projection.code,
            r#"String url = "http://x/*y*/"; char c = '/';  "#
        );
        assert_eq!(projection.comments, "// tail");
    }

    #[test]
    fn escaped_quotes_do_not_end_literals() {
        let source = "String s = \"a\\\"/*b\"; /* c */";
        let projection = project(source);
        assert_eq!(projection.code, "String s = \"a\\\"/*b\";  ");
        assert_eq!(projection.comments, "/* c */");
    }

    #[test]
    fn editing_comment_text_leaves_code_projection_unchanged() {
        let before = project("/** Adds two integers. */ int add();");
        let after = project("/** Adds three integers. */ int add();");
        assert_eq!(before.code, after.code);
        assert_ne!(before.comments, after.comments);
    }

    #[test]
    fn unterminated_block_comment_runs_to_end() {
        let projection = project("int x; /* open");
        assert_eq!(projection.code, "int x;  ");
        assert_eq!(projection.comments, "/* open");
    }
}
