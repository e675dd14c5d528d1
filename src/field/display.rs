use serde::Serialize;

/// How a choice-valued field is presented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldDisplayType {
    #[default]
    Default,
    RadioList,
    CheckboxList,
    DropDown,
}
