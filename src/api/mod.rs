mod export_config;
mod figure_payload;
mod json_contract;
mod layout_merge;
mod template_registry;
mod trace_selector;

pub use export_config::{DEFAULT_EXPORT_FILENAME, ExportConfig, ImageButtonOptions, ImageFormat};
pub use figure_payload::FigurePayload;
pub use json_contract::{
    EXPORT_CONFIG_JSON_SCHEMA_V1, ExportConfigJsonContractV1, STYLE_PROFILE_JSON_SCHEMA_V1,
    StyleProfileJsonContractV1,
};
pub use layout_merge::merge_layout;
pub use template_registry::TemplateRegistry;
pub use trace_selector::{
    MissingPropertyPolicy, Selection, TraceQuery, sel_trace, sel_trace_by_name, select_traces,
};
