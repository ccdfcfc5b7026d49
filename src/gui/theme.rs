use eframe::egui::{
    self,
    Color32,
    RichText,
};

#[derive(Clone)]
pub struct Theme {
    dark: ThemeDetails,
    light: ThemeDetails,
}

#[derive(Clone)]
struct ThemeDetails {
    question: Color32,
    answer: Color32,
    muted: Color32,
    link: Color32,
    categories: [Color32; 6],
}

impl Default for Theme {
    fn default() -> Self {
        Self::study()
    }
}

impl Theme {
    pub fn study() -> Self {
        Self { dark: ThemeDetails::study_dark(), light: ThemeDetails::study_light() }
    }

    fn details(&self, ui: &egui::Ui) -> &ThemeDetails {
        match ui.visuals().dark_mode {
            true => &self.dark,
            false => &self.light,
        }
    }

    pub fn question(&self, ui: &egui::Ui, content: &str) -> RichText {
        RichText::new(content).strong().size(16.0).color(self.details(ui).question)
    }

    pub fn answer(&self, ui: &egui::Ui, content: &str) -> RichText {
        RichText::new(content).color(self.details(ui).answer)
    }

    pub fn hint(&self, ui: &egui::Ui, content: &str) -> RichText {
        RichText::new(content).italics().color(self.details(ui).muted)
    }

    pub fn link(&self, ui: &egui::Ui, content: &str) -> RichText {
        RichText::new(format!("→ {content}")).small().color(self.details(ui).link)
    }

    /// Same category, same color, across renders and runs.
    pub fn category(&self, ui: &egui::Ui, content: &str) -> RichText {
        let palette = &self.details(ui).categories;
        let color = palette[category_slot(content, palette.len())];
        RichText::new(content).small().strong().color(color)
    }
}

impl ThemeDetails {
    fn study_dark() -> Self {
        Self {
            question: Color32::from_rgb(0xe6, 0xe9, 0xef),
            answer: Color32::from_rgb(0xa6, 0xe3, 0xa1),
            muted: Color32::from_rgb(0x93, 0x99, 0xb2),
            link: Color32::from_rgb(0x89, 0xb4, 0xfa),
            categories: [
                Color32::from_rgb(0xf3, 0x8b, 0xa8),
                Color32::from_rgb(0xfa, 0xb3, 0x87),
                Color32::from_rgb(0xf9, 0xe2, 0xaf),
                Color32::from_rgb(0x94, 0xe2, 0xd5),
                Color32::from_rgb(0xcb, 0xa6, 0xf7),
                Color32::from_rgb(0x74, 0xc7, 0xec),
            ],
        }
    }

    fn study_light() -> Self {
        Self {
            question: Color32::from_rgb(0x4c, 0x4f, 0x69),
            answer: Color32::from_rgb(0x40, 0xa0, 0x2b),
            muted: Color32::from_rgb(0x7c, 0x7f, 0x93),
            link: Color32::from_rgb(0x1e, 0x66, 0xf5),
            categories: [
                Color32::from_rgb(0xd2, 0x0f, 0x39),
                Color32::from_rgb(0xfe, 0x64, 0x0b),
                Color32::from_rgb(0xdf, 0x8e, 0x1d),
                Color32::from_rgb(0x17, 0x92, 0x99),
                Color32::from_rgb(0x88, 0x39, 0xef),
                Color32::from_rgb(0x20, 0x9f, 0xb5),
            ],
        }
    }
}

pub fn set_theme(ctx: &egui::Context, dark_mode: bool) {
    let (theme, preference) = match dark_mode {
        true => (egui::Theme::Dark, egui::ThemePreference::Dark),
        false => (egui::Theme::Light, egui::ThemePreference::Light),
    };
    ctx.set_theme(theme);
    ctx.options_mut(|o| o.theme_preference = preference);
}

fn category_slot(category: &str, slots: usize) -> usize {
    // FNV-1a, stable across runs unlike the std hasher
    let hash = category
        .bytes()
        .fold(0xcbf2_9ce4_8422_2325_u64, |hash, b| (hash ^ b as u64).wrapping_mul(0x100_0000_01b3));
    (hash % slots as u64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_slot_is_stable() {
        let first = category_slot("General", 6);
        assert_eq!(category_slot("General", 6), first);
        assert!(first < 6);
        assert_eq!(category_slot("", 6), (0xcbf2_9ce4_8422_2325_u64 % 6) as usize);
    }
}
