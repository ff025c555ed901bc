use gizmo_core::{GizmoError, GizmoOptions, MarkupOptions, Result};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Minimum calendar view the picker can drill down to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MinViewMode {
    #[default]
    Days,
    Months,
    Years,
}

impl MinViewMode {
    /// Option value understood by the client-side widget.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Days => "days",
            Self::Months => "months",
            Self::Years => "years",
        }
    }
}

/// Calendar view the picker opens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StartView {
    #[default]
    Month,
    Year,
    Decade,
}

impl StartView {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Month => "month",
            Self::Year => "year",
            Self::Decade => "decade",
        }
    }
}

/// Options for a calendar date-input gizmo.
///
/// The template layer renders these as a labelled text input with a
/// calendar affordance, and initializes the client-side picker from
/// [`DatePicker::client_options`]. Date strings (`format`, `start_date`,
/// `end_date`, `initial`) are opaque here; the client widget interprets
/// them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatePicker {
    /// Name of the input element, used for form submission.
    pub name: String,
    /// Display text for the label that accompanies the picker.
    #[serde(default)]
    pub display_text: String,
    /// Close the picker automatically once a date is selected.
    #[serde(default)]
    pub autoclose: bool,
    /// Show calendar week numbers on the left of the picker.
    #[serde(default)]
    pub calendar_weeks: bool,
    /// Show a clear button.
    #[serde(default)]
    pub clear_button: bool,
    /// Days of the week to disable, 0–6 with 0 = Sunday, comma separated
    /// (e.g. `"0,6"`).
    #[serde(default)]
    pub days_of_week_disabled: String,
    /// Last selectable date; later dates are shown disabled.
    #[serde(default)]
    pub end_date: String,
    /// Date format string, in the client widget's format syntax.
    #[serde(default)]
    pub format: String,
    /// Minimum view mode the picker can drill down to.
    #[serde(default)]
    pub min_view_mode: MinViewMode,
    /// Enables multi-selection of dates up to the number given.
    #[serde(default = "default_multidate")]
    pub multidate: u32,
    /// First selectable date; earlier dates are shown disabled.
    #[serde(default)]
    pub start_date: String,
    /// View the picker starts on.
    #[serde(default)]
    pub start_view: StartView,
    /// Show a today button.
    #[serde(default)]
    pub today_button: bool,
    /// Highlight the current date.
    #[serde(default)]
    pub today_highlight: bool,
    /// Day the week starts on, 0–6 with 0 = Sunday.
    #[serde(default)]
    pub week_start: u8,
    /// Initial value to seed the input with.
    #[serde(default)]
    pub initial: String,
    /// Render the input disabled.
    #[serde(default)]
    pub disabled: bool,
    /// Form-validation message rendered inline next to the input.
    #[serde(default)]
    pub error: String,
    /// Attributes and classes for the root markup element, flattened to
    /// top-level `attributes` / `classes` keys in option tables.
    #[serde(flatten)]
    pub markup: MarkupOptions,
}

fn default_multidate() -> u32 {
    1
}

impl DatePicker {
    pub const GIZMO_NAME: &'static str = "date_picker";

    /// Picker for the given form field name, every other option at its
    /// default. Remaining options are set with struct-update syntax.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_text: String::new(),
            autoclose: false,
            calendar_weeks: false,
            clear_button: false,
            days_of_week_disabled: String::new(),
            end_date: String::new(),
            format: String::new(),
            min_view_mode: MinViewMode::Days,
            multidate: 1,
            start_date: String::new(),
            start_view: StartView::Month,
            today_button: false,
            today_highlight: false,
            week_start: 0,
            initial: String::new(),
            disabled: false,
            error: String::new(),
            markup: MarkupOptions::new(),
        }
    }

    /// Build a picker from a widget options table, as found in a page
    /// definition. `name` is the one required key.
    pub fn from_table(table: toml::Table) -> Result<Self> {
        if !table.contains_key("name") {
            return Err(GizmoError::MissingRequiredField {
                gizmo: Self::GIZMO_NAME,
                field: "name",
            });
        }
        table
            .try_into()
            .map_err(|e| GizmoError::Config(format!("date_picker options: {e}")))
    }

    /// `days_of_week_disabled` parsed as the list the client widget
    /// expects. Tokens outside 0–6 are skipped.
    pub fn disabled_days(&self) -> Vec<u8> {
        self.days_of_week_disabled
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .filter_map(|token| match token.parse::<u8>() {
                Ok(day) if day <= 6 => Some(day),
                _ => {
                    tracing::warn!("ignoring invalid day-of-week '{token}' in days_of_week_disabled");
                    None
                }
            })
            .collect()
    }

    /// Initialization options for the client-side calendar widget, keyed
    /// by its JavaScript option names.
    ///
    /// Unset string options are omitted so the client keeps its own
    /// defaults; flags and counts always pass through.
    pub fn client_options(&self) -> Value {
        let mut opts = Map::new();
        opts.insert("autoclose".into(), json!(self.autoclose));
        opts.insert("calendarWeeks".into(), json!(self.calendar_weeks));
        opts.insert("clearBtn".into(), json!(self.clear_button));
        if !self.days_of_week_disabled.is_empty() {
            opts.insert("daysOfWeekDisabled".into(), json!(self.disabled_days()));
        }
        if !self.end_date.is_empty() {
            opts.insert("endDate".into(), json!(self.end_date));
        }
        if !self.format.is_empty() {
            opts.insert("format".into(), json!(self.format));
        }
        opts.insert("minViewMode".into(), json!(self.min_view_mode.as_str()));
        opts.insert("multidate".into(), json!(self.multidate));
        if !self.start_date.is_empty() {
            opts.insert("startDate".into(), json!(self.start_date));
        }
        opts.insert("startView".into(), json!(self.start_view.as_str()));
        opts.insert("todayBtn".into(), json!(self.today_button));
        opts.insert("todayHighlight".into(), json!(self.today_highlight));
        opts.insert("weekStart".into(), json!(self.week_start));
        Value::Object(opts)
    }
}

impl GizmoOptions for DatePicker {
    fn gizmo_name(&self) -> &'static str {
        Self::GIZMO_NAME
    }

    fn markup(&self) -> &MarkupOptions {
        &self.markup
    }
}
