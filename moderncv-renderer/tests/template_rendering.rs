//! End-to-end rendering checks across every template and language.

use moderncv_core::{CvDocument, ExperienceField, FieldPath, Language, Section};
use moderncv_renderer::{Renderer, TemplateKind};

fn renderer() -> Renderer {
    Renderer::new().expect("renderer")
}

#[test]
fn every_template_renders_every_section() {
    let r = renderer();
    let doc = CvDocument::sample();
    for kind in TemplateKind::all() {
        let out = r.render_kind(&doc, *kind, Language::En).expect("render");
        for needle in [
            "Jane Doe",
            "Senior Product Designer",
            "Experience",
            "Education",
            "Skills",
            "Innovate Inc.",
            "Design University",
            "Figma",
            "React",
        ] {
            assert!(out.markup.contains(needle), "{kind:?} missing {needle:?}");
        }
    }
}

#[test]
fn unknown_template_renders_exactly_like_modern() {
    let r = renderer();
    let doc = CvDocument::sample();
    let fallback = r.render(&doc, "futuristic", Language::En).expect("render");
    let modern = r.render(&doc, "modern", Language::En).expect("render");
    assert_eq!(fallback.template, TemplateKind::Modern);
    assert_eq!(fallback.markup, modern.markup);
}

#[test]
fn switching_templates_does_not_touch_the_document() {
    let r = renderer();
    let doc = CvDocument::sample();
    let snapshot = doc.clone();
    for id in ["classic", "minimalist", "modern", "nope"] {
        r.render(&doc, id, Language::Fr).expect("render");
    }
    assert_eq!(doc, snapshot);
}

#[test]
fn layouts_place_contact_details_differently() {
    let r = renderer();
    let doc = CvDocument::sample();

    let modern = r.render_kind(&doc, TemplateKind::Modern, Language::En).unwrap();
    assert!(modern.markup.contains("&bull;"));
    assert!(!modern.markup.contains("janedoe.design"), "modern omits website");
    assert!(modern.markup.contains("rounded-full"));
    assert!(modern.markup.contains("data-skills=\"pills\""));

    let classic = r.render_kind(&doc, TemplateKind::Classic, Language::En).unwrap();
    assert!(classic.markup.contains("<p>janedoe.design</p>"));
    assert!(classic.markup.contains("rounded-md"));
    assert!(classic.markup.contains("data-skills=\"outlined\""));

    let minimalist = r.render_kind(&doc, TemplateKind::Minimalist, Language::En).unwrap();
    assert!(!minimalist.markup.contains("<img"));
    assert!(minimalist.markup.contains("janedoe.design"));
    assert!(minimalist.markup.contains("data-skills=\"plain\""));
}

#[test]
fn experience_heading_joins_role_and_company() {
    let r = renderer();
    let mut doc = CvDocument::sample();
    let idx = doc.add_entry(Section::Experience);
    assert!(doc.set_field(FieldPath::Experience(idx, ExperienceField::Role), "Intern"));
    assert!(doc.set_field(FieldPath::Experience(idx, ExperienceField::Company), "Acme"));
    let out = r.render_kind(&doc, TemplateKind::Classic, Language::En).unwrap();
    assert!(out.markup.contains("Intern @ Acme"));
}

#[test]
fn arabic_renders_right_to_left_with_localized_headings() {
    let r = renderer();
    let doc = CvDocument::sample();
    let out = r.render(&doc, "classic", Language::Ar).unwrap();
    assert!(out.markup.contains("dir=\"rtl\""));
    assert!(out.markup.contains("lang=\"ar\""));
    let ar = r.labels().labels(Language::Ar);
    assert!(out.markup.contains(&ar.experience_header));

    let en = r.render(&doc, "classic", Language::En).unwrap();
    assert!(en.markup.contains("dir=\"ltr\""));
}

#[test]
fn user_values_are_html_escaped() {
    let r = renderer();
    let mut doc = CvDocument::sample();
    doc.personal_info.name = "<script>alert(1)</script>".to_string();
    doc.set_skills_from_text("C<>, \"quoted\"");
    for kind in TemplateKind::all() {
        let out = r.render_kind(&doc, *kind, Language::En).unwrap();
        assert!(!out.markup.contains("<script>"), "{kind:?}");
        assert!(out.markup.contains("&lt;script&gt;"), "{kind:?}");
        assert!(out.markup.contains("C&lt;&gt;"), "{kind:?}");
        assert!(out.markup.contains("&quot;quoted&quot;"), "{kind:?}");
    }
}

#[test]
fn empty_sections_still_render_headings() {
    let r = renderer();
    let mut doc = CvDocument::sample();
    assert!(doc.remove_entry(Section::Education, 1));
    assert!(doc.remove_entry(Section::Education, 0));
    let out = r.render_kind(&doc, TemplateKind::Modern, Language::De).unwrap();
    let de = r.labels().labels(Language::De);
    assert!(out.markup.contains(&de.education_header));
    assert!(!out.markup.contains("Design University"));
}

#[test]
fn user_template_dir_overrides_embedded_template() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::create_dir_all(dir.path().join("cv")).unwrap();
    std::fs::write(
        dir.path().join("cv/modern.html"),
        "<p data-custom=\"1\">{{ header.name }}</p>",
    )
    .unwrap();
    std::fs::write(dir.path().join("cv/ignored.txt"), "{{ broken").unwrap();

    let r = Renderer::with_template_dir(Some(dir.path())).expect("renderer");
    let doc = CvDocument::sample();
    let out = r.render(&doc, "modern", Language::En).unwrap();
    assert_eq!(out.markup, "<p data-custom=\"1\">Jane Doe</p>");

    let classic = r.render(&doc, "classic", Language::En).unwrap();
    assert!(classic.markup.contains("data-template=\"classic\""));
}

#[test]
fn missing_user_template_dir_is_ignored() {
    let dir = tempfile::tempdir().expect("tempdir");
    let r = Renderer::with_template_dir(Some(&dir.path().join("absent"))).expect("renderer");
    let out = r.render(&CvDocument::sample(), "minimalist", Language::Es).unwrap();
    assert_eq!(out.template, TemplateKind::Minimalist);
}
