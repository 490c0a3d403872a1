use super::*;
use serde_json::json;

// =============================================================
// resolve_url
// =============================================================

#[test]
fn resolve_url_joins_relative_paths() {
    assert_eq!(resolve_url("https://cms.test/", "/uploads/a.png"), "https://cms.test/uploads/a.png");
    assert_eq!(resolve_url("https://cms.test", "uploads/a.png"), "https://cms.test/uploads/a.png");
}

#[test]
fn resolve_url_keeps_absolute_urls() {
    assert_eq!(resolve_url("https://cms.test", "https://cdn.test/a.png"), "https://cdn.test/a.png");
    assert_eq!(resolve_url("https://cms.test", "//cdn.test/a.png"), "//cdn.test/a.png");
    assert_eq!(resolve_url("https://cms.test", ""), "");
}

// =============================================================
// populate params
// =============================================================

#[test]
fn bank_populate_params_are_indexed() {
    let params = BankLayout::populate_params();
    assert_eq!(params[0], ("populate[0]".to_owned(), "hero_image".to_owned()));
    assert_eq!(params.len(), BankLayout::POPULATE.len());
    assert!(params.iter().any(|(_, v)| v == "eligibility"));
}

#[test]
fn landing_populates_dynamic_zone() {
    let params = LandingPage::populate_params();
    assert_eq!(params, vec![("populate[blocks][populate]".to_owned(), "*".to_owned())]);
}

#[test]
fn landing_populate_params_follow_the_declared_zones() {
    let params = LandingPage::populate_params();
    assert_eq!(params.len(), LandingPage::POPULATE.len());
    for (zone, (key, _)) in LandingPage::POPULATE.iter().zip(&params) {
        assert_eq!(key, &format!("populate[{zone}][populate]"));
    }
}

// =============================================================
// payloads
// =============================================================

#[test]
fn bank_layout_parses_with_missing_optionals() {
    let body = json!({
        "data": [{
            "id": 4,
            "documentId": "abc",
            "name": "Avanse",
            "slug": "avanse",
            "eligibility": [{ "title": "Admit from a recognised university" }],
            "trusted_by": [{ "url": "/uploads/iit.png", "alternativeText": "IIT" }]
        }],
        "meta": { "pagination": { "total": 1 } }
    });
    let list: CmsList<BankLayout> = serde_json::from_value(body).unwrap();
    let mut bank = list.into_first().unwrap();
    assert_eq!(bank.name, "Avanse");
    assert!(bank.hero_image.is_none());
    assert!(bank.documents.is_empty());
    assert_eq!(bank.eligibility[0].detail, None);

    bank.resolve_media("https://cms.test");
    assert_eq!(bank.trusted_by[0].url, "https://cms.test/uploads/iit.png");
}

#[test]
fn empty_collection_has_no_first() {
    let list: CmsList<Service> = serde_json::from_value(json!({ "data": [] })).unwrap();
    assert!(list.into_first().is_none());
    let missing: CmsList<Service> = serde_json::from_value(json!({})).unwrap();
    assert!(missing.data.is_empty());
}

#[test]
fn landing_blocks_skip_unknown_components() {
    let body = json!({
        "title": "Home",
        "blocks": [
            { "__component": "blocks.hero", "id": 1, "heading": "Study abroad, funded",
              "image": { "url": "/uploads/hero.jpg" } },
            { "__component": "blocks.video", "id": 2, "src": "x" },
            { "__component": "blocks.stats", "id": 3, "items": [{ "label": "Loans", "value": "5000+" }] }
        ]
    });
    let mut page: LandingPage = serde_json::from_value(body).unwrap();
    assert_eq!(page.blocks.len(), 3);
    assert_eq!(page.known_blocks().count(), 2);
    assert!(matches!(page.blocks[1], LandingBlock::Unknown));

    page.resolve_media("https://cms.test");
    let LandingBlock::Hero(hero) = &page.blocks[0] else {
        panic!("expected hero block");
    };
    assert_eq!(hero.image.as_ref().unwrap().url, "https://cms.test/uploads/hero.jpg");
}

#[test]
fn testimonial_avatars_are_resolved() {
    let mut block = LandingBlock::Testimonials(TestimonialsBlock {
        heading: None,
        items: vec![Testimonial {
            name: "Riya".into(),
            university: Some("TU Munich".into()),
            quote: "Smooth".into(),
            avatar: Some(Media { url: "/uploads/riya.jpg".into(), ..Media::default() }),
        }],
    });
    block.resolve_media("https://cms.test");
    let LandingBlock::Testimonials(t) = block else { unreachable!() };
    assert_eq!(t.items[0].avatar.as_ref().unwrap().url, "https://cms.test/uploads/riya.jpg");
}

#[test]
fn media_alt_falls_back_when_blank() {
    let media = Media { url: "/a.png".into(), alternative_text: Some("  ".into()), ..Media::default() };
    assert_eq!(media.alt_or("Partner logo"), "Partner logo");
    let named = Media { alternative_text: Some("HDFC".into()), ..media };
    assert_eq!(named.alt_or("Partner logo"), "HDFC");
}
