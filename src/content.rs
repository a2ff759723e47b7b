//! Fixed page content: text blocks, asset file names, and captions.
//!
//! Everything here is a build-time literal. The page renderer never mutates
//! or reorders these; bullet lists in particular are order-significant.

/// Page title shown in the browser tab.
pub const PAGE_TITLE: &str = "Eben Wentzel | Computational Biology";

/// Banner image file name, resolved against the assets directory.
pub const BANNER_FILE: &str = "banner.png";

/// About-section portrait image file name.
pub const ABOUT_IMAGE_FILE: &str = "mindset.png";

/// Closing docking-pose image file name.
pub const DOCKING_IMAGE_FILE: &str = "docking.jpg";

/// Caption attached to the about-section image.
pub const ABOUT_IMAGE_CAPTION: &str = "Computational biology mindset";

/// Caption attached to the docking image.
pub const DOCKING_IMAGE_CAPTION: &str = "The final product";

/// Display width in pixels for the docking image in the contact section.
pub const DOCKING_IMAGE_WIDTH_PX: u32 = 420;

/// Biography prose, rendered as one paragraph per entry, in order.
pub const ABOUT_PARAGRAPHS: [&str; 8] = [
    "My work sits at the intersection of pharmacology, computation, and experimental biology, with a central focus on using in silico approaches to interrogate complex drug–biological systems before they are explored experimentally. I am motivated by mechanistic understanding rather than surface-level outcomes. I want to know not only whether a drug works, but how it works, why it fails, and under which assumptions any conclusion remains valid. This emphasis on first principles shapes how I think about research problems and how I design studies.",
    "I am particularly drawn to in silico research because it enforces intellectual rigor. Computational models demand explicit assumptions, formal parameterisation, and quantitative justification. There is little room for hand-waving. Either a model converges or it does not; either a hypothesis survives stress-testing or it collapses. I find this constraint productive rather than limiting. It strips away narrative comfort and forces clarity, which is essential when dealing with biological systems that are inherently complex and noisy.",
    "My interest in drugs arises from their role as controlled perturbations of biological systems. A drug is a physical entity governed by chemistry and physics, yet its effects propagate through multiple biological scales, from molecular interactions to cellular and phenotypic outcomes. Understanding this translation requires tools that can move seamlessly between abstraction and experiment. Computation provides that bridge, allowing hypotheses to be refined and constrained before they encounter the variability of the laboratory.",
    "Broadly, my research interests include structure–function relationships in drug–target interactions, cytoskeletal dynamics and their pharmacological modulation, and mechanism-driven drug repositioning strategies. I am particularly interested in integrating in silico predictions with in vitro validation in a tightly coupled feedback loop. I am most engaged by problems that are complex, multivariate, and resistant to simple explanations. As the complexity of a system increases, so does my desire to understand it comprehensively. Partial explanations and superficial correlations are unsatisfying; I prefer models that are explicit enough to fail and therefore improve.",
    "A core aspect of my interest in computational research is its reliance on physics and mathematics. Molecular dynamics, energy landscapes, statistical mechanics, and stochastic modelling are not auxiliary tools but foundational components of meaningful in silico work. I am drawn to this formalism because it replaces intuition with structure and transforms biological claims into testable, falsifiable propositions. While biological systems are noisy, the interactions underlying them obey physical laws, and computation allows those laws to be explored quantitatively rather than descriptively.",
    "Looking ahead, I see the future of in silico research moving beyond a supportive or illustrative role toward becoming a primary driver of hypothesis generation in drug development. The goal is not brute-force prediction or opaque machine learning models, but mechanistically informed simulations that meaningfully constrain experimental design. I believe the field will increasingly prioritise interpretability, uncertainty quantification, and integration with experimental endpoints over raw predictive performance.",
    "In this future, computational scientists are not service providers who validate pre-existing ideas, but co-architects of biological understanding. Simulations should be treated as experiments in their own right, complete with assumptions, limitations, and uncertainty, rather than as visual aids. When used properly, in silico methods reduce experimental ambiguity, sharpen hypotheses, and make biological research more efficient and more honest.",
    "My approach to research is inherently iterative. I formalise assumptions computationally, generate constrained and testable hypotheses, interrogate them experimentally, and refine the models based on failure rather than confirmation. I am most productive when theory and experiment are in tension, because that tension exposes weak assumptions and forces conceptual progress.",
];

/// Section headings.
pub const ABOUT_HEADING: &str = "About Me";
pub const THEMES_HEADING: &str = "Research Themes";
pub const CONTACT_HEADING: &str = "Contact";

/// In-silico column subheading.
pub const IN_SILICO_HEADING: &str = "In silico work";

/// Lead-in line for the in-silico column.
pub const IN_SILICO_INTRO: &str = "My primary objective in the in silico component is to characterise epothilone–target interactions at a mechanistic level and generate testable hypotheses that meaningfully guide wet-lab work. This includes:";

/// In-silico bullet points, order-significant.
pub const IN_SILICO_POINTS: [&str; 4] = [
    "Defining binding modes, stability, and interaction networks using molecular docking and molecular dynamics simulations.",
    "Probing how structural variations influence microtubule binding, conformational dynamics, and potential resistance-relevant interactions",
    "Identifying non-obvious structure–function relationships that are not apparent from static models or literature consensus.",
    "Reducing experimental ambiguity by narrowing the hypothesis space before in vitro validation.",
];

/// Closing line for the in-silico column.
pub const IN_SILICO_OUTRO: &str = "The goal is not to produce \u{201c}pretty simulations,\u{201d} but to constrain reality to make the experimental phase sharper, cheaper, and more informative.";

/// In-vitro column subheading.
pub const IN_VITRO_HEADING: &str = "In vitro work";

/// Lead-in line for the in-vitro column.
pub const IN_VITRO_INTRO: &str = "The in vitro component exists to interrogate and falsify the computational predictions. My objectives here are to:";

/// In-vitro bullet points, order-significant.
pub const IN_VITRO_POINTS: [&str; 4] = [
    "Validate predicted drug effects on cytoskeletal dynamics, cell viability, and relevant phenotypic readouts.",
    "Quantify dose–response relationships informed by in silico predictions rather than exploratory guessing.",
    "Examine discrepancies between computational models and biological outcomes to refine both.",
    "Build a coherent mechanistic narrative that links molecular interaction \u{2192} cellular effect \u{2192} therapeutic relevance.",
];

/// Closing line for the in-vitro column.
pub const IN_VITRO_OUTRO: &str = "The lab is not a fishing expedition. It is a controlled test of ideas already shaped by computation.";

/// Contact details.
pub const CONTACT_EMAIL: &str = "ebens.research@gmail.com";
pub const CONTACT_LINKEDIN: &str = "https://za.linkedin.com/in/eben-wentzel-4013352a4";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_columns_have_four_points() {
        assert_eq!(IN_SILICO_POINTS.len(), 4);
        assert_eq!(IN_VITRO_POINTS.len(), 4);
    }

    #[test]
    fn test_no_empty_text_blocks() {
        for p in ABOUT_PARAGRAPHS {
            assert!(!p.trim().is_empty());
        }
        for p in IN_SILICO_POINTS.iter().chain(IN_VITRO_POINTS.iter()) {
            assert!(!p.trim().is_empty());
        }
    }

    #[test]
    fn test_asset_file_names_are_bare() {
        for name in [BANNER_FILE, ABOUT_IMAGE_FILE, DOCKING_IMAGE_FILE] {
            assert!(!name.contains('/') && !name.contains('\\'));
        }
    }
}
