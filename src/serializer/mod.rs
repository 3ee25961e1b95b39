/// Widget initialization script serializer
///
/// This module turns a [`WidgetConfig`] into the client-side statement
/// that initializes the widget, emitting only settings that differ from
/// their defaults.

mod error;
mod fields;
pub mod traits;

pub use error::ScriptError;

use indexmap::IndexMap;
use log::{debug, trace};
use serde_json::Value;
use std::fmt;
use std::io;
use validator::Validate;

use crate::config::{AsyncConfig, ScriptOptions, WidgetConfig};
use fields::{Field, Source, FIELDS};
use traits::{LocalizationProvider, UrlResolver};

/// The initialization script serializer
///
/// The serializer is stateless: every render reads the widget and asks
/// the collaborators again, so rendering the same widget twice yields
/// the same statement.
pub struct Serializer<'a> {
    /// Resolves save/remove actions to URLs
    pub urls: &'a dyn UrlResolver,
    /// Supplies localized messages
    pub localization: &'a dyn LocalizationProvider,
    /// Shape of the emitted call
    pub options: ScriptOptions,
}

impl<'a> Serializer<'a> {
    /// Create a serializer emitting `initialize('#<name>', {...});`
    pub fn new(urls: &'a dyn UrlResolver, localization: &'a dyn LocalizationProvider) -> Self {
        Self {
            urls,
            localization,
            options: ScriptOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ScriptOptions) -> Self {
        self.options = options;
        self
    }

    /// Render the complete initialization statement
    ///
    /// # Example
    /// ```
    /// use widget_script::config::WidgetConfig;
    /// use widget_script::serializer::Serializer;
    /// use widget_script::serializer::traits::{DefaultLocalization, PatternUrlResolver};
    ///
    /// let urls = PatternUrlResolver::default();
    /// let serializer = Serializer::new(&urls, &DefaultLocalization);
    ///
    /// let script = serializer.render(&WidgetConfig::new("Upload").with_enabled(false)).unwrap();
    /// assert_eq!(script, "initialize('#Upload', {enabled:false});");
    /// ```
    pub fn render(&self, widget: &WidgetConfig) -> Result<String, ScriptError> {
        self.options.validate()?;
        debug!("Rendering initialization script for '{}'", widget.name);

        let body = self.options_body(widget)?;
        let mut script = self.options.call_prefix(&widget.name);
        if !body.is_empty() {
            script.push_str(self.options.argument_separator());
            script.push('{');
            script.push_str(&body);
            script.push('}');
        }
        script.push_str(");");

        Ok(script)
    }

    /// Render and write the statement to `out` in a single call
    pub fn write_initialization_script<W>(
        &self,
        widget: &WidgetConfig,
        out: &mut W,
    ) -> Result<(), ScriptError>
    where
        W: fmt::Write + ?Sized,
    {
        let script = self.render(widget)?;
        out.write_str(&script)?;
        Ok(())
    }

    /// Render and write the statement to a byte stream
    pub fn write_to<W>(&self, widget: &WidgetConfig, out: &mut W) -> Result<(), ScriptError>
    where
        W: io::Write + ?Sized,
    {
        let script = self.render(widget)?;
        out.write_all(script.as_bytes())?;
        Ok(())
    }

    /// Comma-separated `key:value` fragments, without the braces
    fn options_body(&self, widget: &WidgetConfig) -> Result<String, ScriptError> {
        let mut fragments = Vec::new();

        for field in &FIELDS {
            match self.field_value(widget, field)? {
                Some(value) => {
                    trace!("Emitting '{}' for '{}'", field.key, widget.name);
                    fragments.push(format!("{}:{}", field.key, value));
                }
                None => trace!("Omitting '{}' for '{}'", field.key, widget.name),
            }
        }

        Ok(fragments.join(","))
    }

    /// Rendered value of a field, or None when it is left at its default
    fn field_value(&self, widget: &WidgetConfig, field: &Field) -> Result<Option<String>, ScriptError> {
        match field.source {
            Source::Flag { value, default } => {
                let current = value(widget);
                Ok((current != default).then(|| current.to_string()))
            }
            Source::Async => match &widget.r#async {
                Some(settings) => self.async_value(widget, settings),
                None => Ok(None),
            },
            Source::Localization => self.localization_value(widget),
            Source::Event(event) => Ok(widget.client_events.handler(event).map(str::to_string)),
        }
    }

    /// `{"saveUrl":...,"saveField":...,"removeUrl":...,"autoUpload":...}`
    fn async_value(
        &self,
        widget: &WidgetConfig,
        settings: &AsyncConfig,
    ) -> Result<Option<String>, ScriptError> {
        let Some(save) = &settings.save else {
            if settings != &AsyncConfig::default() {
                debug!(
                    "Async settings for '{}' have no save action, omitting them",
                    widget.name
                );
            }
            return Ok(None);
        };

        let mut entries = vec![("saveUrl", quote(&self.urls.resolve(save)?))];

        if let Some(field) = settings.save_field.as_deref().filter(|f| !f.is_empty()) {
            entries.push(("saveField", quote(field)));
        }

        if let Some(remove) = &settings.remove {
            entries.push(("removeUrl", quote(&self.urls.resolve(remove)?)));
        }

        entries.push(("autoUpload", settings.auto_upload.to_string()));

        Ok(Some(object_literal(entries)))
    }

    /// `{"remove":"Entfernen",...}` for a non-default locale
    ///
    /// The widget's own overrides win over the provider's messages. Keys
    /// are compared after camel-casing, so `Remove` and `remove` collapse
    /// into one entry holding the later text.
    fn localization_value(&self, widget: &WidgetConfig) -> Result<Option<String>, ScriptError> {
        if self.localization.is_default() {
            if widget.localization.as_ref().is_some_and(|m| !m.is_empty()) {
                debug!(
                    "Locale is the default, ignoring localization overrides of '{}'",
                    widget.name
                );
            }
            return Ok(None);
        }

        let provided = self.localization.all()?;
        let overrides = widget.localization.iter().flatten();

        let mut messages: IndexMap<String, String> = IndexMap::new();
        for (key, text) in provided.iter().chain(overrides) {
            messages.insert(camel_case(key), quote(text));
        }

        if messages.is_empty() {
            return Ok(None);
        }

        Ok(Some(object_literal(messages.into_iter().collect())))
    }
}

/// JSON string literal for `text`
fn quote(text: &str) -> String {
    Value::String(text.to_owned()).to_string()
}

/// Object literal with quoted keys and pre-rendered values
fn object_literal<K: AsRef<str>>(entries: Vec<(K, String)>) -> String {
    let body: Vec<String> = entries
        .iter()
        .map(|(key, value)| format!("{}:{}", quote(key.as_ref()), value))
        .collect();
    format!("{{{}}}", body.join(","))
}

/// Lower-case the first character: `Remove` -> `remove`
fn camel_case(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ActionReference, ClientEvent};
    use pretty_assertions::assert_eq;
    use super::traits::{DefaultLocalization, PatternUrlResolver, StaticLocalization};

    fn render(widget: &WidgetConfig) -> String {
        let urls = PatternUrlResolver::default();
        Serializer::new(&urls, &DefaultLocalization).render(widget).unwrap()
    }

    fn render_localized(widget: &WidgetConfig, localization: &StaticLocalization) -> String {
        let urls = PatternUrlResolver::default();
        Serializer::new(&urls, localization).render(widget).unwrap()
    }

    fn upload() -> WidgetConfig {
        WidgetConfig::new("Upload")
    }

    fn save_index() -> ActionReference {
        ActionReference::new("Home", "Index")
    }

    #[test]
    fn test_default_configuration_has_no_options() {
        assert_eq!(render(&upload()), "initialize('#Upload');");
    }

    #[test]
    fn test_enabled_serialized_when_false() {
        assert_eq!(
            render(&upload().with_enabled(false)),
            "initialize('#Upload', {enabled:false});"
        );
    }

    #[test]
    fn test_multiple_serialized_when_false() {
        assert!(render(&upload().with_multiple(false)).contains("{multiple:false}"));
    }

    #[test]
    fn test_show_file_list_serialized_when_false() {
        assert!(render(&upload().with_show_file_list(false)).contains("{showFileList:false}"));
    }

    #[test]
    fn test_async_serialized_when_save_is_set() {
        let widget = upload().with_async(AsyncConfig::new().with_save(save_index()));
        assert!(render(&widget).contains(r#"{async:{"saveUrl":"Home/Index","autoUpload":true}}"#));
    }

    #[test]
    fn test_async_save_field() {
        let widget = upload().with_async(
            AsyncConfig::new()
                .with_save(save_index())
                .with_save_field("attachments"),
        );
        assert!(render(&widget).contains(
            r#"{async:{"saveUrl":"Home/Index","saveField":"attachments","autoUpload":true}}"#
        ));
    }

    #[test]
    fn test_async_remove_action() {
        let widget = upload().with_async(
            AsyncConfig::new()
                .with_save(save_index())
                .with_remove(ActionReference::new("Home", "Remove")),
        );
        assert!(render(&widget).contains(
            r#"{async:{"saveUrl":"Home/Index","removeUrl":"Home/Remove","autoUpload":true}}"#
        ));
    }

    #[test]
    fn test_async_field_order() {
        let widget = upload().with_async(
            AsyncConfig::new()
                .with_remove(ActionReference::new("Home", "Remove"))
                .with_save_field("files")
                .with_auto_upload(false)
                .with_save(save_index()),
        );
        assert_eq!(
            render(&widget),
            r#"initialize('#Upload', {async:{"saveUrl":"Home/Index","saveField":"files","removeUrl":"Home/Remove","autoUpload":false}});"#
        );
    }

    #[test]
    fn test_remove_without_save_is_suppressed() {
        let widget = upload()
            .with_async(AsyncConfig::new().with_remove(ActionReference::new("Home", "Remove")));
        assert_eq!(render(&widget), "initialize('#Upload');");
    }

    #[test]
    fn test_auto_upload_serialized_when_false() {
        let widget = upload().with_async(
            AsyncConfig::new()
                .with_save(save_index())
                .with_auto_upload(false),
        );
        assert!(render(&widget).contains(r#"{async:{"saveUrl":"Home/Index","autoUpload":false}}"#));
    }

    #[test]
    fn test_auto_upload_without_save_is_suppressed() {
        let widget = upload().with_async(AsyncConfig::new().with_auto_upload(false));
        assert_eq!(render(&widget), "initialize('#Upload');");
    }

    #[test]
    fn test_empty_save_field_is_omitted() {
        let widget = upload().with_async(
            AsyncConfig::new()
                .with_save(save_index())
                .with_save_field(""),
        );
        assert!(render(&widget).contains(r#"{async:{"saveUrl":"Home/Index","autoUpload":true}}"#));
    }

    #[test]
    fn test_each_client_event_serialized_alone() {
        for event in ClientEvent::ALL {
            let handler = format!("{}Handler", event.key());
            let script = render(&upload().with_event(event, handler.clone()));
            assert_eq!(
                script,
                format!("initialize('#Upload', {{{}:{}}});", event.key(), handler)
            );
        }
    }

    #[test]
    fn test_on_load_event() {
        let script = render(&upload().with_event(ClientEvent::Load, "loadHandler"));
        assert!(script.contains("{load:loadHandler}"));
    }

    #[test]
    fn test_localization_serialized_when_not_default() {
        let localization = StaticLocalization::new(false).with_message("Remove", "Entfernen");
        let script = render_localized(&upload(), &localization);
        assert!(script.contains(r#"{localization:{"remove":"Entfernen"}}"#));
    }

    #[test]
    fn test_localization_omitted_when_default() {
        let localization = StaticLocalization::new(true).with_message("Remove", "Entfernen");
        assert_eq!(render_localized(&upload(), &localization), "initialize('#Upload');");
    }

    #[test]
    fn test_empty_localization_omitted() {
        let localization = StaticLocalization::new(false);
        assert_eq!(render_localized(&upload(), &localization), "initialize('#Upload');");
    }

    #[test]
    fn test_widget_localization_serialized() {
        let localization = StaticLocalization::new(false);
        let widget = upload().with_localization("Remove", "Entfernen");

        assert_eq!(
            render_localized(&widget, &localization),
            r#"initialize('#Upload', {localization:{"remove":"Entfernen"}});"#
        );
    }

    #[test]
    fn test_widget_localization_overrides_provider() {
        let localization = StaticLocalization::new(false)
            .with_message("Select", "Auswählen")
            .with_message("Remove", "Entfernen");
        let widget = upload()
            .with_localization("Remove", "Löschen")
            .with_localization("Cancel", "Abbrechen");

        assert!(render_localized(&widget, &localization).contains(
            r#"{localization:{"select":"Auswählen","remove":"Löschen","cancel":"Abbrechen"}}"#
        ));
    }

    #[test]
    fn test_widget_localization_omitted_when_default() {
        let localization = StaticLocalization::new(true).with_message("Select", "Auswählen");
        let widget = upload().with_localization("Remove", "Entfernen");

        assert_eq!(render_localized(&widget, &localization), "initialize('#Upload');");
        assert_eq!(render(&widget), "initialize('#Upload');");
    }

    #[test]
    fn test_localization_keys_collapse_after_camel_case() {
        let localization = StaticLocalization::new(false)
            .with_message("Remove", "A")
            .with_message("remove", "B");

        assert_eq!(
            render_localized(&upload(), &localization),
            r#"initialize('#Upload', {localization:{"remove":"B"}});"#
        );
    }

    #[test]
    fn test_localization_strings_are_escaped() {
        let localization = StaticLocalization::new(false)
            .with_message("Select", "Say \"hi\"")
            .with_message("Cancel", "a\\b");
        let script = render_localized(&upload(), &localization);
        assert!(script.contains(r#"{localization:{"select":"Say \"hi\"","cancel":"a\\b"}}"#));
    }

    #[test]
    fn test_full_field_order() {
        let localization = StaticLocalization::new(false).with_message("Remove", "Entfernen");
        let widget = upload()
            .with_event(ClientEvent::Remove, "onRemove")
            .with_event(ClientEvent::Load, "onLoad")
            .with_async(AsyncConfig::new().with_save(save_index()))
            .with_show_file_list(false)
            .with_multiple(false)
            .with_enabled(false);

        assert_eq!(
            render_localized(&widget, &localization),
            r#"initialize('#Upload', {enabled:false,multiple:false,showFileList:false,async:{"saveUrl":"Home/Index","autoUpload":true},localization:{"remove":"Entfernen"},load:onLoad,remove:onRemove});"#
        );
    }

    #[test]
    fn test_jquery_plugin_style() {
        let urls = PatternUrlResolver::default();
        let serializer = Serializer::new(&urls, &DefaultLocalization)
            .with_options(ScriptOptions::jquery_plugin("kendoUpload"));

        assert_eq!(
            serializer.render(&upload()).unwrap(),
            "jQuery('#Upload').kendoUpload();"
        );
        assert_eq!(
            serializer.render(&upload().with_enabled(false)).unwrap(),
            "jQuery('#Upload').kendoUpload({enabled:false});"
        );
    }

    #[test]
    fn test_custom_function_name() {
        let urls = PatternUrlResolver::default();
        let serializer = Serializer::new(&urls, &DefaultLocalization)
            .with_options(ScriptOptions::function("app.upload"));

        assert_eq!(serializer.render(&upload()).unwrap(), "app.upload('#Upload');");
    }

    #[test]
    fn test_invalid_options_rejected() {
        let urls = PatternUrlResolver::default();
        let serializer = Serializer::new(&urls, &DefaultLocalization)
            .with_options(ScriptOptions::function(""));

        let err = serializer.render(&upload()).unwrap_err();
        assert!(matches!(err, ScriptError::Config { .. }));
    }

    #[test]
    fn test_idempotent() {
        let localization = StaticLocalization::new(false).with_message("Remove", "Entfernen");
        let widget = upload()
            .with_enabled(false)
            .with_async(AsyncConfig::new().with_save(save_index()))
            .with_event(ClientEvent::Success, "done");

        let first = render_localized(&widget, &localization);
        let second = render_localized(&widget, &localization);
        assert_eq!(first, second);
    }

    #[test]
    fn test_name_passed_through_verbatim() {
        assert_eq!(render(&WidgetConfig::new("")), "initialize('#');");
    }

    struct FailingResolver;

    impl UrlResolver for FailingResolver {
        fn resolve(&self, action: &crate::config::ActionReference) -> Result<String, ScriptError> {
            Err(ScriptError::url_resolution(
                &action.controller_name,
                &action.action_name,
                "no route",
            ))
        }
    }

    struct FailingLocalization;

    impl LocalizationProvider for FailingLocalization {
        fn is_default(&self) -> bool {
            false
        }

        fn all(&self) -> Result<IndexMap<String, String>, ScriptError> {
            Err(ScriptError::localization("culture not installed"))
        }
    }

    #[test]
    fn test_resolver_error_propagates() {
        let serializer = Serializer::new(&FailingResolver, &DefaultLocalization);
        let widget = upload().with_async(AsyncConfig::new().with_save(save_index()));

        assert_eq!(
            serializer.render(&widget).unwrap_err(),
            ScriptError::url_resolution("Home", "Index", "no route")
        );
    }

    #[test]
    fn test_resolver_not_called_without_save() {
        let serializer = Serializer::new(&FailingResolver, &DefaultLocalization);
        let widget = upload()
            .with_async(AsyncConfig::new().with_remove(ActionReference::new("Home", "Remove")));

        assert_eq!(serializer.render(&widget).unwrap(), "initialize('#Upload');");
    }

    #[test]
    fn test_localization_error_propagates() {
        let urls = PatternUrlResolver::default();
        let serializer = Serializer::new(&urls, &FailingLocalization);

        assert!(matches!(
            serializer.render(&upload()),
            Err(ScriptError::Localization { .. })
        ));
    }

    #[test]
    fn test_write_initialization_script_to_string() {
        let urls = PatternUrlResolver::default();
        let serializer = Serializer::new(&urls, &DefaultLocalization);

        let mut out = String::from("<script>");
        serializer
            .write_initialization_script(&upload().with_multiple(false), &mut out)
            .unwrap();
        assert_eq!(out, "<script>initialize('#Upload', {multiple:false});");
    }

    #[test]
    fn test_write_to_bytes() {
        let urls = PatternUrlResolver::default();
        let serializer = Serializer::new(&urls, &DefaultLocalization);

        let mut out: Vec<u8> = Vec::new();
        serializer.write_to(&upload(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "initialize('#Upload');");
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("Remove"), "remove");
        assert_eq!(camel_case("dropFilesHere"), "dropFilesHere");
        assert_eq!(camel_case(""), "");
    }
}
