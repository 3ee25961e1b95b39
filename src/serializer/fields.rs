use crate::config::{ClientEvent, WidgetConfig};

/// Where a top-level option takes its value from
#[derive(Debug, Clone, Copy)]
pub(crate) enum Source {
    /// A boolean emitted only when it differs from `default`
    Flag {
        value: fn(&WidgetConfig) -> bool,
        default: bool,
    },
    /// The nested async settings literal
    Async,
    /// The nested localization literal
    Localization,
    /// A handler bound to a client event
    Event(ClientEvent),
}

/// One entry of the options literal
#[derive(Debug, Clone, Copy)]
pub(crate) struct Field {
    pub key: &'static str,
    pub source: Source,
}

fn enabled(widget: &WidgetConfig) -> bool {
    widget.enabled
}

fn multiple(widget: &WidgetConfig) -> bool {
    widget.multiple
}

fn show_file_list(widget: &WidgetConfig) -> bool {
    widget.show_file_list
}

/// Top-level options in emission order
pub(crate) const FIELDS: [Field; 13] = [
    Field { key: "enabled", source: Source::Flag { value: enabled, default: true } },
    Field { key: "multiple", source: Source::Flag { value: multiple, default: true } },
    Field { key: "showFileList", source: Source::Flag { value: show_file_list, default: true } },
    Field { key: "async", source: Source::Async },
    Field { key: "localization", source: Source::Localization },
    Field { key: "load", source: Source::Event(ClientEvent::Load) },
    Field { key: "select", source: Source::Event(ClientEvent::Select) },
    Field { key: "upload", source: Source::Event(ClientEvent::Upload) },
    Field { key: "success", source: Source::Event(ClientEvent::Success) },
    Field { key: "error", source: Source::Event(ClientEvent::Error) },
    Field { key: "complete", source: Source::Event(ClientEvent::Complete) },
    Field { key: "cancel", source: Source::Event(ClientEvent::Cancel) },
    Field { key: "remove", source: Source::Event(ClientEvent::Remove) },
];
