//! Static catalog of everything the pack builder knows about.
//!
//! Indices into [`CHARACTERS`] and [`LOCALES`] are the stable positional
//! indices the wizard pages expose, so the order of these tables is part of
//! the contract.

/// Character voice folders, in display order.
///
/// The first character of each folder name is a sort prefix; the rest is the
/// short name used in asset file names.
pub const CHARACTERS: [&str; 10] = [
    "1yoshino",
    "2mako",
    "3murasame",
    "4lena",
    "5koharu",
    "6roka",
    "7mizuha",
    "8rentarou",
    "9genjurou",
    "$yasuharu",
];

/// Index of the "keep the stock voice" entry on the character page.
///
/// Murasame is the voice the mod already ships, so selecting her means
/// "do not replace anything".
pub const SENTINEL_INDEX: usize = 2;

/// A target locale for the title-screen textures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    /// BCP 47 code, also the texture source directory name
    pub code: &'static str,
    /// Whether localized textures are bundled for this locale
    pub has_textures: bool,
}

/// Archive locales, in display order. Index 0 is the default.
pub const LOCALES: [Locale; 3] = [
    Locale {
        code: "zh-CN",
        has_textures: false,
    },
    Locale {
        code: "zh-TW",
        has_textures: true,
    },
    Locale {
        code: "en-US",
        has_textures: true,
    },
];

/// Title-screen sound cue with its asset suffix and sound event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoundCategory {
    /// Suffix of the `.ogg` asset (`{short}_{file_suffix}.ogg`)
    pub file_suffix: &'static str,
    /// Sound event name in `sounds.json`
    pub event: &'static str,
}

/// Sound categories in the order references are appended.
pub const SOUND_CATEGORIES: [SoundCategory; 6] = [
    SoundCategory {
        file_suffix: "load",
        event: "yuzu_title_button_select_world",
    },
    SoundCategory {
        file_suffix: "system",
        event: "yuzu_title_button_options",
    },
    SoundCategory {
        file_suffix: "goodbye",
        event: "yuzu_title_button_quit_game",
    },
    SoundCategory {
        file_suffix: "senren",
        event: "yuzu_title_senren",
    },
    SoundCategory {
        file_suffix: "after",
        event: "yuzu_title_button_realms",
    },
    SoundCategory {
        file_suffix: "extra",
        event: "yuzu_title_button_mod_list",
    },
];

/// Title-screen textures that have localized variants.
pub const GUI_TEXTURES: [&str; 15] = [
    "title_continue_button_normal",
    "title_continue_button_on",
    "title_logo",
    "title_mod_list_button_normal",
    "title_mod_list_button_on",
    "title_new_game_button_normal",
    "title_new_game_button_on",
    "title_options_button_normal",
    "title_options_button_on",
    "title_quit_game_button_normal",
    "title_quit_game_button_on",
    "title_realms_button_normal",
    "title_realms_button_on",
    "title_select_world_button_normal",
    "title_select_world_button_on",
];

/// Archive name used while the stock voice stays selected.
///
/// The `§` sequences are Minecraft formatting codes, so the pack list shows
/// the name coloured.
pub const OUTPUT_NAME_KEEP: &str = "§dOUTPUT§7-§7-§rYuZuUI.zip";

/// Archive name used when the pack replaces the stock sounds.
pub const OUTPUT_NAME_REPLACE: &str = "§dOUTPUT§7-§c§lREPLACE§7-§rYuZuUI.zip";

/// Asset key of the base sound document.
pub const SOUND_DOCUMENT_SOURCE: &str = "sounds/others/sounds.json";
/// Archive path of the generated sound document.
pub const SOUND_DOCUMENT_DEST: &str = "assets/yuzu/sounds.json";

/// Package metadata `(source, destination)`.
pub const PACK_METADATA: (&str, &str) = ("sounds/others/pack.mcmeta", "pack.mcmeta");
/// Package icon `(source, destination)`.
pub const PACK_ICON: (&str, &str) = ("sounds/others/pack.png", "pack.png");

/// Namespace prefix of sound references.
pub const SOUND_NAMESPACE: &str = "yuzu";

/// Short name of a character folder (`"1yoshino"` → `"yoshino"`).
pub fn short_name(folder: &str) -> &str {
    let mut chars = folder.chars();
    chars.next();
    chars.as_str()
}

/// Relative voice key `{folder}/{short}_{suffix}`, shared by the asset path
/// and the sound reference.
pub fn voice_key(folder: &str, category: &SoundCategory) -> String {
    format!("{folder}/{}_{}", short_name(folder), category.file_suffix)
}

/// Source key of a voice asset in the asset store.
pub fn voice_source(folder: &str, category: &SoundCategory) -> String {
    format!("sounds/{}.ogg", voice_key(folder, category))
}

/// Archive path of a voice asset.
pub fn voice_dest(folder: &str, category: &SoundCategory) -> String {
    format!("assets/{SOUND_NAMESPACE}/sounds/{}.ogg", voice_key(folder, category))
}

/// Namespaced sound reference appended to `sounds.json`.
pub fn voice_reference(folder: &str, category: &SoundCategory) -> String {
    format!("{SOUND_NAMESPACE}:{}", voice_key(folder, category))
}

/// Source key of a localized texture.
pub fn texture_source(locale: &Locale, name: &str) -> String {
    format!("sounds/others/textures/gui/{}/{name}.png", locale.code)
}

/// Locale-agnostic archive path of a texture.
pub fn texture_dest(name: &str) -> String {
    format!("assets/{SOUND_NAMESPACE}/textures/gui/{name}.png")
}

/// Output archive name for a replace / keep build.
pub fn output_name(replace: bool) -> &'static str {
    if replace {
        OUTPUT_NAME_REPLACE
    } else {
        OUTPUT_NAME_KEEP
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_name_strips_sort_prefix() {
        assert_eq!(short_name("1yoshino"), "yoshino");
        assert_eq!(short_name("$yasuharu"), "yasuharu");
        assert_eq!(short_name(""), "");
    }

    #[test]
    fn test_voice_paths() {
        let load = &SOUND_CATEGORIES[0];
        assert_eq!(voice_source("2mako", load), "sounds/2mako/mako_load.ogg");
        assert_eq!(
            voice_dest("2mako", load),
            "assets/yuzu/sounds/2mako/mako_load.ogg"
        );
        assert_eq!(voice_reference("2mako", load), "yuzu:2mako/mako_load");
    }

    #[test]
    fn test_texture_paths() {
        assert_eq!(
            texture_source(&LOCALES[2], "title_logo"),
            "sounds/others/textures/gui/en-US/title_logo.png"
        );
        assert_eq!(texture_dest("title_logo"), "assets/yuzu/textures/gui/title_logo.png");
    }

    #[test]
    fn test_output_name_selection() {
        assert!(output_name(true).contains("§c§lREPLACE"));
        assert!(!output_name(false).contains("REPLACE"));
        assert!(output_name(false).ends_with("YuZuUI.zip"));
    }

    #[test]
    fn test_sentinel_is_stock_voice() {
        assert_eq!(CHARACTERS[SENTINEL_INDEX], "3murasame");
    }
}
