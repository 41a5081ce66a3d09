// Form builder behavior: prompt-driven construction and indexed access

use formdeck::form::FormModel;

#[test]
fn test_rows_match_prompt_count() {
    let form = FormModel::new(["First", "Second", "Third"]);
    assert_eq!(form.rows(), 3);
    assert_eq!(form.fields().len(), 3);
    assert_eq!(form.button_row(), 4);
}

#[test]
fn test_labels_get_colon_suffix() {
    let form = FormModel::new(["Name", "Age"]);
    assert_eq!(form.label(0), "Name:");
    assert_eq!(form.label(1), "Age:");
}

#[test]
fn test_secret_prefix_marks_field_and_strips_label() {
    let form = FormModel::new(["Name", "p-Secret"]);
    assert!(!form.fields()[0].secret);
    assert!(form.fields()[1].secret);
    assert_eq!(form.label(1), "Secret:");
    // the raw prompt keeps its marker
    assert_eq!(form.fields()[1].prompt, "p-Secret");
}

#[test]
fn test_out_of_range_access_is_neutral() {
    let mut form = FormModel::new(["Only"]);
    assert_eq!(form.field(5), "");
    assert_eq!(form.label(5), "");
    form.set_field(5, "ignored");
    form.set_label(5, "ignored");
    form.clear_field(5);
    assert_eq!(form.rows(), 1);
    assert_eq!(form.field(0), "");
}

#[test]
fn test_set_get_clear_by_index() {
    let mut form = FormModel::new(["A", "B"]);
    form.set_field(0, "hello");
    form.set_field(1, "world");
    assert_eq!(form.field(0), "hello");
    form.clear_field(0);
    assert_eq!(form.field(0), "");
    assert_eq!(form.field(1), "world");
    form.clear_all();
    assert_eq!(form.field(1), "");
}

#[test]
fn test_empty_prompt_list_yields_empty_form() {
    let form = FormModel::new(Vec::<String>::new());
    assert_eq!(form.rows(), 0);
    assert_eq!(form.instructions(), "");
    assert_eq!(form.button_row(), 1);
}

#[test]
fn test_default_instruction_banner_with_fields() {
    let form = FormModel::new(["Name"]);
    assert_eq!(form.instructions(), "Enter the following information");
}

#[test]
fn test_labels_are_editable() {
    let mut form = FormModel::new(["Name"]);
    form.set_label(0, "Full name:");
    assert_eq!(form.label(0), "Full name:");
}
