//! Brace - Template Engine
//!
//! Renders text containing `{{ expression }}` markers against a [`Context`] of named
//! values and helpers. Two block helpers are understood: `{{if name}}...{{/if}}`
//! renders its body when the condition is truthy, and `{{each name}}...{{/each}}`
//! renders its body once for every element of a sequence or entry of a mapping.
//!
//! # Examples
//!
//! ```
//! use brace::Context;
//!
//! let context = Context::new()
//!     .with_must("title", "Letters")
//!     .with_must("letters", ["A", "B"]);
//! let result = brace::render(
//!     "<h1>{{title}}</h1>{{each letters}}<p>{{@index}}: {{@this}}</p>{{/each}}",
//!     &context,
//! );
//!
//! assert_eq!(result.unwrap(), "<h1>Letters</h1><p>0: A</p><p>1: B</p>");
//! ```
mod compile;
mod context;
mod engine;
mod format;
mod log;
mod region;
mod render;

pub mod helper;

pub use compile::{Builder, Marker};
pub use context::Context;
pub use engine::Engine;
pub use helper::Helper;
pub use log::{Error, Pointer, Visual};
pub use region::Region;

/// Render the source text with the given [`Context`], using the default markers.
///
/// # Errors
///
/// Returns an [`Error`] if the source contains invalid syntax, or a [`Helper`]
/// returns an `Error` itself.
///
/// # Examples
///
/// ```
/// use brace::Context;
///
/// let result = brace::render("hello, {{ name }}!", &Context::new().with_must("name", "taylor"));
///
/// assert_eq!(result.unwrap(), "hello, taylor!");
/// ```
#[inline]
pub fn render(source: &str, context: &Context) -> Result<String, Error> {
    Engine::default().render(source, context)
}

#[cfg(test)]
mod tests {
    use super::{render, Context};
    use crate::log::{
        MISMATCHED_CLOSING_TAG, UNEXPECTED_CLOSING_TAG, UNEXPECTED_DELIMITER, UNTERMINATED_BLOCK,
        UNTERMINATED_EXPRESSION,
    };
    use serde_json::json;

    #[test]
    fn test_render_scenarios() {
        let cases = [
            (
                r#"<div class="{{className}}"><p>{{content}}</p></div>"#,
                json!({"className": "container", "content": "Hello, world!"}),
                r#"<div class="container"><p>Hello, world!</p></div>"#,
            ),
            ("<h3>{{title}}</h3>", json!({}), "<h3></h3>"),
            (
                "<div>{{if content}}<p>{{content}}</p>{{/if}}</div>",
                json!({"content": ""}),
                "<div></div>",
            ),
            (
                "{{each alphabets}}<p>{{@index}}</p>{{/each}}",
                json!({"alphabets": ["A", "B", "C"]}),
                "<p>0</p><p>1</p><p>2</p>",
            ),
            (
                "{{each alphabets}}<p>{{@key}}: {{@this}}</p>{{/each}}",
                json!({"alphabets": {"A": "1st", "B": "2nd", "C": "3rd"}}),
                "<p>A: 1st</p><p>B: 2nd</p><p>C: 3rd</p>",
            ),
            (
                "<h1>{{notFunction notArg1 notArg2}}</h1>",
                json!({"notFunction": "it is not a function", "notArg1": "x"}),
                "<h1>it is not a function</h1>",
            ),
        ];

        for (source, data, expected) in cases {
            let context = Context::from_value(data).unwrap();
            assert_eq!(render(source, &context).unwrap(), expected, "{source}");
        }
    }

    #[test]
    fn test_literal_only_is_identity() {
        for source in ["", "plain text", "a } b }} c { d", "<p>\n  multi\r\n</p>"] {
            assert_eq!(render(source, &Context::new()).unwrap(), source);
        }
    }

    #[test]
    fn test_render_is_repeatable() {
        let context = Context::new()
            .with_must("content", "Paragraph")
            .with_must("alphabets", ["A", "B", "C"]);
        let source = "{{each alphabets}}<p>{{content}} {{@this}}</p>{{/each}}";

        assert_eq!(
            render(source, &context).unwrap(),
            render(source, &context).unwrap()
        );
    }

    #[test]
    fn test_render_page() {
        let context = Context::new()
            .with_must("title", "Users")
            .with_must(
                "users",
                json!([
                    {"name": "taylor", "admin": true},
                    {"name": "jordan", "admin": false}
                ]),
            )
            .with_must("footer", json!({"year": 2023}));
        let source = "<h1>{{ title }}</h1>\n\
            <ul>{{each users}}<li>{{@this.name}}{{if @this.admin}} (admin){{/if}}</li>{{/each}}</ul>\n\
            <small>{{footer.year}}</small>";

        assert_eq!(
            render(source, &context).unwrap(),
            "<h1>Users</h1>\n\
            <ul><li>taylor (admin)</li><li>jordan</li></ul>\n\
            <small>2023</small>"
        );
    }

    #[test]
    fn test_render_values() {
        let context = Context::new()
            .with_must("float", 2.5)
            .with_must("whole", 3.0)
            .with_must("list", json!([1, "two", null]))
            .with_must("object", json!({"a": 1}));

        assert_eq!(
            render("{{float}} {{whole}} {{list}} {{object}}", &context).unwrap(),
            "2.5 3 [1, two, null] {a: 1}"
        );
    }

    #[test]
    fn test_render_errors() {
        let cases = [
            ("{{ name", UNTERMINATED_EXPRESSION),
            ("{{ a {{ b }}", UNEXPECTED_DELIMITER),
            ("text{{/each}}", UNEXPECTED_CLOSING_TAG),
            ("{{if a}}{{/each}}", MISMATCHED_CLOSING_TAG),
            ("{{each a}}{{if b}}{{/if}}", UNTERMINATED_BLOCK),
        ];

        for (source, reason) in cases {
            let error = render(source, &Context::new()).unwrap_err();
            assert_eq!(error.reason(), reason, "{source}");
        }
    }
}
