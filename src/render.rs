mod scope;
mod truthy;

use crate::{
    compile::{
        tree::{Block, Expression, Tree, Variable},
        Keyword, Template,
    },
    format::Formatter,
    log::{error_write, Error},
    Context,
};
use serde_json::Value;
use std::{borrow::Cow, fmt::Write};

use self::{
    scope::{Resolved, Scope},
    truthy::is_truthy,
};

pub struct Renderer<'template, 'context> {
    /// The template being rendered.
    template: &'template Template<'template>,
    /// The Context that the Template is rendered with.
    context: &'context Context,
}

impl<'template, 'context> Renderer<'template, 'context> {
    /// Create a new Renderer.
    pub fn new(template: &'template Template<'template>, context: &'context Context) -> Self {
        Renderer { template, context }
    }

    /// Render the [`Template`] stored inside the [`Renderer`].
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if a [`Helper`][`crate::Helper`] fails, or writing
    /// to the buffer fails.
    pub fn render(&self) -> Result<String, Error> {
        let mut buffer = String::with_capacity(self.template.source.len());
        let mut formatter = Formatter::new(&mut buffer);

        self.render_trees(&self.template.trees, &Scope::root(self.context), &mut formatter)?;
        Ok(buffer)
    }

    /// Render the given [`Tree`] instances in order.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if any of the `Tree` instances cannot be rendered.
    fn render_trees(
        &self,
        trees: &[Tree],
        scope: &Scope<'_>,
        formatter: &mut Formatter,
    ) -> Result<(), Error> {
        for tree in trees {
            match tree {
                Tree::Text(region) => formatter
                    .write_str(&self.template.source[*region])
                    .map_err(|_| error_write())?,
                Tree::Output(expression) => {
                    if let Some(value) = self.evaluate(expression, scope)? {
                        formatter.write_output(&value).map_err(|_| error_write())?
                    }
                }
                Tree::Block(block) => match block.keyword {
                    Keyword::If => self.render_if(block, scope, formatter)?,
                    Keyword::Each => self.render_each(block, scope, formatter)?,
                },
            }
        }

        Ok(())
    }

    /// Render the body of an "if" [`Block`] when its condition is truthy.
    fn render_if(
        &self,
        block: &Block,
        scope: &Scope<'_>,
        formatter: &mut Formatter,
    ) -> Result<(), Error> {
        let condition = self.evaluate(&block.expression, scope)?;
        if is_truthy(condition.as_deref()) {
            self.render_trees(&block.body, scope, formatter)?;
        }

        Ok(())
    }

    /// Render the body of an "each" [`Block`] once for every element of a
    /// sequence, or every entry of a mapping.
    ///
    /// Any other target renders nothing.
    fn render_each(
        &self,
        block: &Block,
        scope: &Scope<'_>,
        formatter: &mut Formatter,
    ) -> Result<(), Error> {
        let Some(target) = self.evaluate(&block.expression, scope)? else {
            return Ok(());
        };

        match &*target {
            Value::Array(items) => {
                for (index, item) in items.iter().enumerate() {
                    let scope = Scope::item(scope, item, index);
                    self.render_trees(&block.body, &scope, formatter)?;
                }
            }
            Value::Object(entries) => {
                for (key, value) in entries {
                    let scope = Scope::entry(scope, key, value);
                    self.render_trees(&block.body, &scope, formatter)?;
                }
            }
            other => tracing::trace!(value = %other, "each target is not a collection"),
        }

        Ok(())
    }

    /// Evaluate an [`Expression`] to return a [`Value`].
    ///
    /// When the head is a helper, the arguments are resolved and the helper
    /// is called with them. When the head is a value, the arguments are
    /// ignored and the value is returned. `None` means the head could not be
    /// resolved.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the helper fails.
    fn evaluate<'a>(
        &self,
        expression: &Expression,
        scope: &Scope<'a>,
    ) -> Result<Option<Cow<'a, Value>>, Error> {
        match self.resolve(&expression.head, scope) {
            None => Ok(None),
            Some(Resolved::Value(value)) => Ok(Some(value)),
            Some(Resolved::Helper(helper)) => {
                let arguments: Vec<Option<Cow<Value>>> = expression
                    .arguments
                    .iter()
                    .map(|argument| self.resolve_value(argument, scope))
                    .collect();
                let arguments: Vec<Option<&Value>> =
                    arguments.iter().map(|argument| argument.as_deref()).collect();

                let returned = helper.call(&arguments).map_err(|e| {
                    e.or_pointer(self.template.source, expression.head.region)
                })?;

                Ok(Some(Cow::Owned(returned)))
            }
        }
    }

    /// Resolve a [`Variable`] that is only allowed to name a value.
    fn resolve_value<'a>(&self, variable: &Variable, scope: &Scope<'a>) -> Option<Cow<'a, Value>> {
        match self.resolve(variable, scope)? {
            Resolved::Value(value) => Some(value),
            Resolved::Helper(_) => None,
        }
    }

    /// Resolve a [`Variable`] against the [`Scope`].
    ///
    /// The first segment of the path is looked up in the scope, and any
    /// further segments walk into objects by key or arrays by index.
    fn resolve<'a>(&self, variable: &Variable, scope: &Scope<'a>) -> Option<Resolved<'a>> {
        let source = self.template.source;
        let resolved = variable.path.split_first().and_then(|(first, rest)| {
            let resolved = scope.lookup(&source[*first])?;
            if rest.is_empty() {
                return Some(resolved);
            }

            let mut value = match resolved {
                Resolved::Value(value) => value,
                Resolved::Helper(_) => return None,
            };
            for key in rest {
                value = descend(value, &source[*key])?;
            }

            Some(Resolved::Value(value))
        });

        if resolved.is_none() {
            tracing::trace!(identifier = &source[variable.region], "unresolved identifier");
        }

        resolved
    }
}

/// Return the member of `value` named by `key`.
///
/// Objects are indexed by key, and arrays by a key made of digits.
fn descend<'a>(value: Cow<'a, Value>, key: &str) -> Option<Cow<'a, Value>> {
    fn member<'v>(value: &'v Value, key: &str) -> Option<&'v Value> {
        match value {
            Value::Object(object) => object.get(key),
            Value::Array(array) => key.parse::<usize>().ok().and_then(|i| array.get(i)),
            _ => None,
        }
    }

    match value {
        Cow::Borrowed(value) => member(value, key).map(Cow::Borrowed),
        Cow::Owned(value) => member(&value, key).cloned().map(Cow::Owned),
    }
}

#[cfg(test)]
mod tests {
    use super::Renderer;
    use crate::{
        compile::{Builder, Parser},
        log::Error,
        Context, Region,
    };
    use serde_json::{json, Value};

    use morel::Finder;

    /// Compile and render the source with the default markers.
    fn helper_render(source: &str, context: &Context) -> Result<String, Error> {
        let finder = Finder::new(Builder::new().to_syntax());
        let template = Parser::new(source, &finder).compile()?;

        Renderer::new(&template, context).render()
    }

    fn get_zero(_: &[Option<&Value>]) -> Result<Value, Error> {
        Ok(json!("0"))
    }

    fn get_class_names_by_status(arguments: &[Option<&Value>]) -> Result<Value, Error> {
        let disabled = matches!(arguments.first(), Some(Some(Value::Bool(true))));
        let prefix = match arguments.get(1) {
            Some(Some(Value::String(prefix))) => prefix.as_str(),
            _ => "",
        };

        Ok(if disabled {
            json!(format!("{prefix}disabled"))
        } else {
            json!("")
        })
    }

    fn numbers_below(arguments: &[Option<&Value>]) -> Result<Value, Error> {
        let n = arguments
            .first()
            .copied()
            .flatten()
            .and_then(Value::as_u64)
            .unwrap_or(0);

        Ok(json!([1, 2, 3, 4, 5].into_iter().take(n as usize).collect::<Vec<_>>()))
    }

    fn describe(arguments: &[Option<&Value>]) -> Result<Value, Error> {
        Ok(json!(arguments
            .iter()
            .map(|a| match a {
                None => "absent".to_string(),
                Some(value) => value.to_string(),
            })
            .collect::<Vec<_>>()
            .join(",")))
    }

    fn fail(_: &[Option<&Value>]) -> Result<Value, Error> {
        Err(Error::build("helper `fail` always fails"))
    }

    fn fail_with_pointer(_: &[Option<&Value>]) -> Result<Value, Error> {
        Err(Error::build("custom").with_pointer("custom visual", Region::new(0..6)))
    }

    #[test]
    fn test_render_raw() {
        let result = helper_render("hello there", &Context::new());

        assert_eq!(result.unwrap(), "hello there");
    }

    #[test]
    fn test_render_output() {
        let result = helper_render(
            "hello there, {{ name }}!",
            &Context::new().with_must("name", "taylor"),
        );

        assert_eq!(result.unwrap(), "hello there, taylor!");
    }

    #[test]
    fn test_render_absent_and_null() {
        let context = Context::new().with_must("nothing", Value::Null);

        assert_eq!(helper_render("<h3>{{title}}</h3>", &context).unwrap(), "<h3></h3>");
        assert_eq!(helper_render("<h3>{{nothing}}</h3>", &context).unwrap(), "<h3></h3>");
        assert_eq!(helper_render("<h3>{{ }}</h3>", &context).unwrap(), "<h3></h3>");
    }

    #[test]
    fn test_render_helper_with_arguments() {
        let context = Context::new()
            .with_must("disabled", true)
            .with_must("enabled", false)
            .with_must("prefix", "item-")
            .with_helper("getClassNamesByStatus", get_class_names_by_status);
        let result = helper_render(
            r#"<div class="{{getClassNamesByStatus disabled prefix}}"></div><div class="{{getClassNamesByStatus enabled}}"></div>"#,
            &context,
        );

        assert_eq!(
            result.unwrap(),
            r#"<div class="item-disabled"></div><div class=""></div>"#
        );
    }

    #[test]
    fn test_render_helper_without_arguments() {
        let context = Context::new().with_helper("getZero", get_zero);

        assert_eq!(helper_render("<p>{{getZero}}</p>", &context).unwrap(), "<p>0</p>");
    }

    #[test]
    fn test_render_helper_receives_absent_arguments() {
        let context = Context::new()
            .with_must("present", "x")
            .with_must("nothing", Value::Null)
            .with_helper("describe", describe)
            .with_helper("other", get_zero);
        let result = helper_render("{{describe present missing nothing other}}", &context);

        assert_eq!(result.unwrap(), r#""x",absent,null,absent"#);
    }

    #[test]
    fn test_render_non_function_head() {
        let context = Context::new()
            .with_must("notFunction", "it is not a function")
            .with_must("notArg1", "it is not an argument1");

        assert_eq!(
            helper_render("<h1>{{notFunction notArg1 notArg2}}</h1>", &context).unwrap(),
            "<h1>it is not a function</h1>"
        );
        assert_eq!(
            helper_render("<h2>{{notFunction notArg1 notArg2}}</h2>", &Context::new()).unwrap(),
            "<h2></h2>"
        );
    }

    #[test]
    fn test_render_if() {
        let source = "<div>{{if content}}<p>{{content}}</p>{{/if}}</div>";

        assert_eq!(
            helper_render(source, &Context::new().with_must("content", "Hello, world!")).unwrap(),
            "<div><p>Hello, world!</p></div>"
        );
        assert_eq!(
            helper_render(source, &Context::new().with_must("content", "")).unwrap(),
            "<div></div>"
        );
        assert_eq!(helper_render(source, &Context::new()).unwrap(), "<div></div>");
    }

    #[test]
    fn test_render_if_helper_condition() {
        let context = Context::new()
            .with_must("yes", true)
            .with_must("no", false)
            .with_helper("getClassNamesByStatus", get_class_names_by_status);

        assert_eq!(
            helper_render("{{if getClassNamesByStatus yes}}a{{/if}}", &context).unwrap(),
            "a"
        );
        assert_eq!(
            helper_render("{{if getClassNamesByStatus no}}a{{/if}}", &context).unwrap(),
            ""
        );
    }

    #[test]
    fn test_render_each_sequence() {
        let context = Context::new()
            .with_must("alphabets", ["A", "B", "C"])
            .with_must("content", "Paragraph");

        assert_eq!(
            helper_render("{{each alphabets}}<p>{{content}}</p>{{/each}}", &context).unwrap(),
            "<p>Paragraph</p><p>Paragraph</p><p>Paragraph</p>"
        );
        assert_eq!(
            helper_render("{{each alphabets}}<p>{{@index}}</p>{{/each}}", &context).unwrap(),
            "<p>0</p><p>1</p><p>2</p>"
        );
        assert_eq!(
            helper_render("{{each alphabets}}<p>{{@this}}</p>{{/each}}", &context).unwrap(),
            "<p>A</p><p>B</p><p>C</p>"
        );
    }

    #[test]
    fn test_render_each_mapping_keeps_insertion_order() {
        let context = Context::new().with_must(
            "alphabets",
            json!({"C": "3rd", "A": "1st", "B": "2nd"}),
        );

        assert_eq!(
            helper_render(
                "{{each alphabets}}<p>{{@key}}: {{@this}}</p>{{/each}}",
                &context
            )
            .unwrap(),
            "<p>C: 3rd</p><p>A: 1st</p><p>B: 2nd</p>"
        );
    }

    #[test]
    fn test_render_each_helper_target() {
        let context = Context::new()
            .with_must("n", 3)
            .with_helper("getPositiveNumbersSmallerThanFive", numbers_below);

        assert_eq!(
            helper_render(
                "{{each getPositiveNumbersSmallerThanFive n}}<p>{{@this}}</p>{{/each}}",
                &context
            )
            .unwrap(),
            "<p>1</p><p>2</p><p>3</p>"
        );
    }

    #[test]
    fn test_render_each_empty_absent_and_scalar() {
        let context = Context::new()
            .with_must("empty", Vec::<String>::new())
            .with_must("scalar", 12)
            .with_must("text", "abc");
        let body = "x{{/each}}";

        for target in ["empty", "missing", "scalar", "text"] {
            let source = format!("[{{{{each {target}}}}}{body}]");
            assert_eq!(helper_render(&source, &context).unwrap(), "[]", "{target}");
        }
    }

    #[test]
    fn test_render_nested_each() {
        let context = Context::new().with_must("rows", json!([["a", "b"], ["c"]]));
        let result = helper_render(
            "{{each rows}}<tr>{{each @this}}<td>{{@index}}{{@this}}</td>{{/each}}</tr>{{/each}}",
            &context,
        );

        assert_eq!(
            result.unwrap(),
            "<tr><td>0a</td><td>1b</td></tr><tr><td>0c</td></tr>"
        );
    }

    #[test]
    fn test_render_nested_bindings_fall_through() {
        let context = Context::new().with_must(
            "groups",
            json!({"vowels": ["a", "e"], "consonants": ["b"]}),
        );
        let result = helper_render(
            "{{each groups}}{{each @this}}{{@key}}={{@this}};{{/each}}{{/each}}",
            &context,
        );

        assert_eq!(result.unwrap(), "vowels=a;vowels=e;consonants=b;");
    }

    #[test]
    fn test_render_if_inside_each() {
        let context = Context::new().with_must("items", json!(["a", "", "c"]));
        let result = helper_render(
            "{{each items}}{{if @this}}[{{@this}}]{{/if}}{{/each}}",
            &context,
        );

        assert_eq!(result.unwrap(), "[a][c]");
    }

    #[test]
    fn test_render_dotted_path() {
        let context = Context::new()
            .with_must("person", json!({"name": "taylor", "tags": ["x", "y"]}))
            .with_must("people", json!([{"name": "a"}, {"name": "b"}]))
            .with_helper("getZero", get_zero);

        assert_eq!(
            helper_render("{{person.name}} {{person.tags.1}} {{person.age}} {{getZero.x}}", &context)
                .unwrap(),
            "taylor y  "
        );
        assert_eq!(
            helper_render("{{each people}}{{@this.name}}{{/each}}", &context).unwrap(),
            "ab"
        );
    }

    #[test]
    fn test_render_helper_error() {
        let context = Context::new().with_helper("fail", fail);
        let error = helper_render("a {{fail}}", &context).unwrap_err();

        assert_eq!(error.reason(), "helper `fail` always fails");
        assert!(format!("{error:#}").contains("--> 1:5"));
    }

    #[test]
    fn test_render_helper_error_keeps_visual() {
        let context = Context::new().with_helper("fail", fail_with_pointer);
        let error = helper_render("a {{fail}}", &context).unwrap_err();

        assert!(format!("{error:#}").contains("custom visual"));
    }

    #[test]
    fn test_render_helper_error_inside_skipped_block() {
        let context = Context::new().with_helper("fail", fail);

        assert_eq!(
            helper_render("{{if missing}}{{fail}}{{/if}}", &context).unwrap(),
            ""
        );
    }
}
