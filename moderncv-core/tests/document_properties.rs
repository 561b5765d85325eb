//! Behavioural properties of the CV document mutations.

use moderncv_core::{
    CvDocument, EducationEntry, EducationField, ExperienceEntry, ExperienceField, FieldPath,
    PersonalField, Section,
};
use rstest::rstest;

fn doc() -> CvDocument {
    CvDocument::sample()
}

// ---------------------------------------------------------------------------
// 1. set_field
// ---------------------------------------------------------------------------

#[rstest]
#[case(FieldPath::Personal(PersonalField::Name), "John Roe")]
#[case(FieldPath::Personal(PersonalField::Website), "")]
#[case(FieldPath::Experience(0, ExperienceField::Company), "Acme")]
#[case(FieldPath::Experience(1, ExperienceField::Description), "Shipped things.\nMany.")]
#[case(FieldPath::Education(0, EducationField::Degree), "PhD")]
#[case(FieldPath::Education(1, EducationField::Duration), "2010 - 2011")]
fn set_field_changes_exactly_one_field(#[case] path: FieldPath, #[case] value: &str) {
    let before = doc();
    let mut after = before.clone();

    assert!(after.set_field(path, value));
    assert_eq!(after.field(path), Some(value));

    // Undo the one change and the documents must be deep-equal again.
    let original = before.field(path).expect("in range").to_string();
    assert!(after.set_field(path, original));
    assert_eq!(after, before);
}

#[test]
fn set_field_leaves_sibling_entries_untouched() {
    let mut d = doc();
    let second = d.experience[1].clone();
    assert!(d.set_field(FieldPath::Experience(0, ExperienceField::Role), "Head of Design"));
    assert_eq!(d.experience[0].role, "Head of Design");
    assert_eq!(d.experience[0].company, "Innovate Inc.");
    assert_eq!(d.experience[1], second);
    assert_eq!(d.education, doc().education);
}

#[rstest]
#[case(FieldPath::Experience(2, ExperienceField::Role))]
#[case(FieldPath::Experience(usize::MAX, ExperienceField::Company))]
#[case(FieldPath::Education(5, EducationField::Institution))]
fn set_field_out_of_range_is_a_noop(#[case] path: FieldPath) {
    let mut d = doc();
    assert!(!d.set_field(path, "ignored"));
    assert_eq!(d, doc());
    assert_eq!(d.field(path), None);
}

#[test]
fn set_field_through_loose_form_triple() {
    let mut d = doc();
    let path = FieldPath::parse(Some("experience"), Some(1), "company").expect("valid path");
    assert!(d.set_field(path, "Tech Solutions GmbH"));
    assert_eq!(d.experience[1].company, "Tech Solutions GmbH");

    let path = FieldPath::parse(Some("personalInfo"), None, "phone").expect("valid path");
    assert!(d.set_field(path, "+44 20 7946 0000"));
    assert_eq!(d.personal_info.phone, "+44 20 7946 0000");
}

// ---------------------------------------------------------------------------
// 2. add_entry
// ---------------------------------------------------------------------------

#[test]
fn add_experience_appends_blank_entry() {
    let mut d = doc();
    let index = d.add_entry(Section::Experience);
    assert_eq!(index, 2);
    let last = d.experience.last().expect("appended");
    assert_eq!(
        last,
        &ExperienceEntry {
            company: String::new(),
            role: String::new(),
            duration: String::new(),
            description: String::new(),
        }
    );
    assert_eq!(d.education.len(), 2, "other section must not grow");
}

#[test]
fn add_education_uses_education_shape() {
    let mut d = doc();
    d.add_entry(Section::Education);
    assert_eq!(
        d.education.last(),
        Some(&EducationEntry {
            institution: String::new(),
            degree: String::new(),
            duration: String::new(),
        })
    );
}

// ---------------------------------------------------------------------------
// 3. remove_entry
// ---------------------------------------------------------------------------

#[test]
fn remove_shifts_later_entries_down() {
    let mut d = doc();
    d.add_entry(Section::Experience);
    assert!(d.set_field(FieldPath::Experience(2, ExperienceField::Company), "Third"));
    let before = d.experience.clone();

    assert!(d.remove_entry(Section::Experience, 0));
    assert_eq!(d.experience.len(), before.len() - 1);
    assert_eq!(d.experience[0], before[1]);
    assert_eq!(d.experience[1], before[2]);
}

#[test]
fn remove_last_remaining_entry_leaves_empty_sequence() {
    let mut d = doc();
    assert!(d.remove_entry(Section::Education, 1));
    assert!(d.remove_entry(Section::Education, 0));
    assert!(d.education.is_empty());
}

#[test]
fn remove_out_of_range_is_a_noop() {
    let mut d = doc();
    assert!(!d.remove_entry(Section::Education, 2));
    assert_eq!(d, doc());
}

#[test]
fn edit_after_remove_addresses_shifted_entry() {
    let mut d = doc();
    assert!(d.remove_entry(Section::Experience, 0));
    assert!(d.set_field(FieldPath::Experience(0, ExperienceField::Role), "Senior UI Designer"));
    assert_eq!(d.experience[0].company, "Tech Solutions");
    assert_eq!(d.experience[0].role, "Senior UI Designer");
}

// ---------------------------------------------------------------------------
// 4. skills
// ---------------------------------------------------------------------------

#[rstest]
#[case("Figma, Sketch ,  React", &["Figma", "Sketch", "React"])]
#[case("rust", &["rust"])]
#[case("", &[""])]
#[case("a,,b", &["a", "", "b"])]
#[case(" Go ,", &["Go", ""])]
#[case("TypeScript, node.js", &["TypeScript", "node.js"])]
fn skills_split_on_commas_and_trim(#[case] raw: &str, #[case] expected: &[&str]) {
    let mut d = doc();
    d.set_skills_from_text(raw);
    assert_eq!(d.skills, expected);
}

#[test]
fn skills_replace_wholesale() {
    let mut d = doc();
    d.set_skills_from_text("Only");
    assert_eq!(d.skills, vec!["Only".to_string()]);
}

// ---------------------------------------------------------------------------
// 5. picture
// ---------------------------------------------------------------------------

#[test]
fn set_profile_picture_touches_only_the_picture() {
    let mut d = doc();
    d.set_profile_picture("data:image/png;base64,AAAA");
    assert_eq!(d.personal_info.profile_picture, "data:image/png;base64,AAAA");
    let mut expected = doc();
    expected.personal_info.profile_picture = "data:image/png;base64,AAAA".to_string();
    assert_eq!(d, expected);
}

// ---------------------------------------------------------------------------
// 6. Serialization shape
// ---------------------------------------------------------------------------

#[test]
fn json_shape_uses_form_keys() {
    let json = serde_json::to_value(doc()).expect("serialize");
    assert_eq!(json["personalInfo"]["name"], "Jane Doe");
    assert_eq!(json["experience"][0]["role"], "Lead UX Designer");
    assert_eq!(json["education"][1]["institution"], "State College");
    assert_eq!(json["skills"][7], "React");

    let back: CvDocument = serde_json::from_value(json).expect("deserialize");
    assert_eq!(back, doc());
}
