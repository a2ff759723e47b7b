//! Askama template structs for the profile page.
//!
//! The page is a pure function of the asset catalog: build the template
//! struct, render it, done. A catalog rendered twice produces
//! byte-identical output.

use askama::Template;

use crate::assets::{AssetCatalog, AssetReport, ResolvedAsset, WidthPolicy};
use crate::content;

/// One image position on the page, either resolved or missing.
pub struct ImageSlot {
    pub resolved: bool,
    pub src: String,
    pub alt: String,
    /// Filesystem path shown in the inline warning when the file is missing.
    pub expected_path: String,
    pub has_caption: bool,
    pub caption_val: String,
    pub has_fixed_width: bool,
    pub width_px: u32,
}

impl ImageSlot {
    fn from_asset(asset: &ResolvedAsset, alt: &str) -> Self {
        let (has_fixed_width, width_px) = match asset.width {
            WidthPolicy::Container => (false, 0),
            WidthPolicy::Fixed(px) => (true, px),
        };
        Self {
            resolved: asset.exists,
            src: asset.url(),
            alt: alt.to_string(),
            expected_path: asset.path.display().to_string(),
            has_caption: asset.caption.is_some(),
            caption_val: asset.caption.unwrap_or_default().to_string(),
            has_fixed_width,
            width_px,
        }
    }
}

/// The whole profile page.
///
/// Field order mirrors render order: global style, full-bleed banner,
/// restored padding, About Me (2:1), Research Themes (1:1), Contact.
#[derive(Template)]
#[template(path = "profile.html")]
pub struct ProfileTemplate {
    pub title: &'static str,
    pub banner: ImageSlot,
    pub about_heading: &'static str,
    pub about_paragraphs: Vec<&'static str>,
    pub about_image: ImageSlot,
    pub themes_heading: &'static str,
    pub in_silico_heading: &'static str,
    pub in_silico_intro: &'static str,
    pub in_silico_points: Vec<&'static str>,
    pub in_silico_outro: &'static str,
    pub in_vitro_heading: &'static str,
    pub in_vitro_intro: &'static str,
    pub in_vitro_points: Vec<&'static str>,
    pub in_vitro_outro: &'static str,
    pub contact_heading: &'static str,
    pub contact_email: &'static str,
    pub contact_linkedin: &'static str,
    pub contact_image: ImageSlot,
    pub has_debug: bool,
    pub debug: AssetReport,
}

impl ProfileTemplate {
    /// Assemble the page from a resolved asset catalog.
    pub fn build(catalog: &AssetCatalog, debug_panel: bool) -> Self {
        Self {
            title: content::PAGE_TITLE,
            banner: ImageSlot::from_asset(&catalog.banner, "Research profile banner"),
            about_heading: content::ABOUT_HEADING,
            about_paragraphs: content::ABOUT_PARAGRAPHS.to_vec(),
            about_image: ImageSlot::from_asset(&catalog.about_image, content::ABOUT_IMAGE_CAPTION),
            themes_heading: content::THEMES_HEADING,
            in_silico_heading: content::IN_SILICO_HEADING,
            in_silico_intro: content::IN_SILICO_INTRO,
            in_silico_points: content::IN_SILICO_POINTS.to_vec(),
            in_silico_outro: content::IN_SILICO_OUTRO,
            in_vitro_heading: content::IN_VITRO_HEADING,
            in_vitro_intro: content::IN_VITRO_INTRO,
            in_vitro_points: content::IN_VITRO_POINTS.to_vec(),
            in_vitro_outro: content::IN_VITRO_OUTRO,
            contact_heading: content::CONTACT_HEADING,
            contact_email: content::CONTACT_EMAIL,
            contact_linkedin: content::CONTACT_LINKEDIN,
            contact_image: ImageSlot::from_asset(
                &catalog.docking_image,
                content::DOCKING_IMAGE_CAPTION,
            ),
            has_debug: debug_panel,
            // The directory listing is only gathered when the panel is
            // actually shown; the normal render path never reads the
            // filesystem beyond the existence checks in the catalog.
            debug: if debug_panel {
                catalog.report()
            } else {
                AssetReport::empty()
            },
        }
    }
}

/// Render the profile page for a resolved catalog.
pub fn render_page(catalog: &AssetCatalog, debug_panel: bool) -> askama::Result<String> {
    ProfileTemplate::build(catalog, debug_panel).render()
}
