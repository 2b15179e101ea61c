//! Archive assembly engine
//!
//! Assembly runs in two steps:
//! 1. [`assemble`] turns a [`FinalSelection`] into an [`AssemblyPlan`]: the
//!    output name, the ordered manifest and the patched sound document.
//! 2. [`write_archive`] copies every manifest entry into a zip container, in
//!    manifest order, one entry at a time.
//!
//! [`build_archive`] chains both and owns the output file on disk.

use std::borrow::Cow;
use std::fs::{self, File};
use std::io::{self, BufWriter, Seek, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::assets::AssetStore;
use crate::catalog::{
    self, GUI_TEXTURES, PACK_ICON, PACK_METADATA, SOUND_CATEGORIES, SOUND_DOCUMENT_DEST,
    SOUND_DOCUMENT_SOURCE,
};
use crate::document::SoundDocument;
use crate::error::{PackError, PackResult};
use crate::manifest::{Manifest, ManifestEntry, ManifestSource};
use crate::selection::FinalSelection;

/// What to do when a manifest entry's source asset is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MissingSourcePolicy {
    /// Log a warning, skip the entry and keep going
    #[default]
    Skip,
    /// Abort assembly on the first missing source
    FailFast,
}

/// Everything needed to write the archive.
#[derive(Debug, Clone)]
pub struct AssemblyPlan {
    /// Archive file name
    pub output_name: &'static str,
    /// Whether managed sound events were switched to `replace: true`
    pub replace: bool,
    pub manifest: Manifest,
    pub document: SoundDocument,
}

/// Result of writing an archive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssemblyReport {
    /// Archive paths written, in order
    pub written: Vec<String>,
    /// Source keys that were missing and skipped
    pub skipped: Vec<String>,
}

impl AssemblyReport {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Plan the archive for a final selection.
///
/// The base sound document is read from `store`; an absent document starts
/// from `{}`.
pub fn assemble(
    selection: &FinalSelection,
    store: &(impl AssetStore + ?Sized),
) -> PackResult<AssemblyPlan> {
    let replace = !selection.keeps_stock_voice();
    let output_name = catalog::output_name(replace);

    let mut document = match store.read(SOUND_DOCUMENT_SOURCE) {
        Some(bytes) => SoundDocument::from_slice(&bytes)?,
        None => {
            log::warn!("Base sound document {SOUND_DOCUMENT_SOURCE} missing, starting empty");
            SoundDocument::empty()
        }
    };

    if replace {
        document.force_replace(SOUND_CATEGORIES.iter().map(|c| c.event));
    }

    let mut manifest = Manifest::new();

    for folder in selection.voice_folders() {
        for category in &SOUND_CATEGORIES {
            manifest.push(ManifestEntry::asset(
                catalog::voice_source(folder, category),
                catalog::voice_dest(folder, category),
            ));
            document.append_sound(category.event, &catalog::voice_reference(folder, category));
        }
    }

    manifest.push(ManifestEntry::sound_document(SOUND_DOCUMENT_DEST));

    match selection.target_locale() {
        Some(locale) if locale.has_textures => {
            for name in GUI_TEXTURES {
                manifest.push(ManifestEntry::asset(
                    catalog::texture_source(locale, name),
                    catalog::texture_dest(name),
                ));
            }
        }
        Some(locale) => log::debug!("No localized textures for {}", locale.code),
        None => log::warn!("Locale index {} outside the catalog", selection.locale),
    }

    manifest.push(ManifestEntry::asset(PACK_METADATA.0, PACK_METADATA.1));
    manifest.push(ManifestEntry::asset(PACK_ICON.0, PACK_ICON.1));

    log::info!(
        "Planned {output_name}: {} entries, replace={replace}",
        manifest.len()
    );

    Ok(AssemblyPlan {
        output_name,
        replace,
        manifest,
        document,
    })
}

/// Write the planned archive into `writer` as a zip container.
pub fn write_archive<W: Write + Seek>(
    plan: &AssemblyPlan,
    store: &(impl AssetStore + ?Sized),
    writer: W,
    policy: MissingSourcePolicy,
) -> PackResult<AssemblyReport> {
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let document_bytes = plan.document.to_vec()?;

    let mut zip = ZipWriter::new(writer);
    let mut report = AssemblyReport::default();

    for entry in &plan.manifest {
        let bytes = match &entry.source {
            ManifestSource::SoundDocument => Cow::Borrowed(document_bytes.as_slice()),
            ManifestSource::Asset(key) => match store.read(key) {
                Some(bytes) => bytes,
                None => match policy {
                    MissingSourcePolicy::Skip => {
                        log::warn!("Skipping {}: source {key} not found", entry.dest);
                        report.skipped.push(key.clone());
                        continue;
                    }
                    MissingSourcePolicy::FailFast => {
                        return Err(PackError::SourceMissing { key: key.clone() });
                    }
                },
            },
        };

        zip.start_file(entry.dest.as_str(), options)?;
        zip.write_all(&bytes)?;
        log::debug!("Copied {} -> {} ({} bytes)", entry.source, entry.dest, bytes.len());
        report.written.push(entry.dest.clone());
    }

    zip.finish()?;
    Ok(report)
}

/// Plan and write the archive into `out_dir`, replacing any previous output
/// with the same name. Returns the archive path and the write report.
///
/// A failed write leaves no file behind at the output path.
pub fn build_archive(
    selection: &FinalSelection,
    store: &(impl AssetStore + ?Sized),
    out_dir: &Path,
    policy: MissingSourcePolicy,
) -> PackResult<(PathBuf, AssemblyReport)> {
    let plan = assemble(selection, store)?;
    let path = out_dir.join(plan.output_name);

    match fs::remove_file(&path) {
        Ok(()) => log::info!("Removed previous {}", path.display()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }

    let file = File::create(&path)?;
    let report = match write_archive(&plan, store, BufWriter::new(file), policy) {
        Ok(report) => report,
        Err(e) => {
            // Never leave a truncated pack under the real name.
            if let Err(cleanup) = fs::remove_file(&path) {
                log::warn!("Could not remove partial {}: {cleanup}", path.display());
            }
            return Err(e);
        }
    };

    log::info!(
        "Wrote {} ({} entries, {} skipped)",
        path.display(),
        report.written.len(),
        report.skipped.len()
    );
    Ok((path, report))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::assets::MemoryAssetStore;
    use crate::catalog::{OUTPUT_NAME_KEEP, OUTPUT_NAME_REPLACE, SENTINEL_INDEX};
    use std::io::Cursor;

    fn base_store() -> MemoryAssetStore {
        MemoryAssetStore::new()
            .with(
                SOUND_DOCUMENT_SOURCE,
                br#"{"yuzu_title_senren": {"replace": false, "sounds": ["yuzu:3murasame/murasame_senren"]}}"#
                    .to_vec(),
            )
            .with(PACK_METADATA.0, b"{\"pack\":{}}".to_vec())
            .with(PACK_ICON.0, vec![0x89, b'P', b'N', b'G'])
    }

    #[test]
    fn test_keep_mode_plan() {
        let plan = assemble(&FinalSelection::default(), &base_store()).unwrap();
        assert_eq!(plan.output_name, OUTPUT_NAME_KEEP);
        assert!(!plan.replace);
        assert_eq!(
            plan.manifest.destinations().collect::<Vec<_>>(),
            vec![SOUND_DOCUMENT_DEST, "pack.mcmeta", "pack.png"]
        );
        assert_eq!(plan.document.replace_flag("yuzu_title_senren"), Some(false));
    }

    #[test]
    fn test_replace_mode_forces_flags_on_all_events() {
        let selection = FinalSelection::new([0], 0);
        let plan = assemble(&selection, &base_store()).unwrap();
        assert_eq!(plan.output_name, OUTPUT_NAME_REPLACE);
        for category in &SOUND_CATEGORIES {
            assert_eq!(plan.document.replace_flag(category.event), Some(true));
        }
    }

    #[test]
    fn test_references_follow_character_then_category_order() {
        let selection = FinalSelection::new([1, 0], 0);
        let plan = assemble(&selection, &base_store()).unwrap();
        assert_eq!(
            plan.document.sounds("yuzu_title_button_select_world"),
            vec!["yuzu:1yoshino/yoshino_load", "yuzu:2mako/mako_load"]
        );
        assert_eq!(
            plan.document.sounds("yuzu_title_senren"),
            vec![
                "yuzu:3murasame/murasame_senren",
                "yuzu:1yoshino/yoshino_senren",
                "yuzu:2mako/mako_senren"
            ]
        );
        let first_six: Vec<_> = plan.manifest.destinations().take(6).collect();
        assert_eq!(first_six[0], "assets/yuzu/sounds/1yoshino/yoshino_load.ogg");
        assert_eq!(first_six[5], "assets/yuzu/sounds/1yoshino/yoshino_extra.ogg");
    }

    #[test]
    fn test_textures_only_for_mapped_locales() {
        for (locale, expected) in [(0, 0), (1, GUI_TEXTURES.len()), (2, GUI_TEXTURES.len())] {
            let plan = assemble(&FinalSelection::new([SENTINEL_INDEX], locale), &base_store()).unwrap();
            let textures = plan
                .manifest
                .destinations()
                .filter(|d| d.starts_with("assets/yuzu/textures/gui/"))
                .count();
            assert_eq!(textures, expected, "locale {locale}");
        }
    }

    #[test]
    fn test_missing_base_document_starts_empty() {
        let store = MemoryAssetStore::new();
        let plan = assemble(&FinalSelection::new([4], 0), &store).unwrap();
        assert_eq!(plan.document.sounds("yuzu_title_senren"), vec!["yuzu:5koharu/koharu_senren"]);
    }

    #[test]
    fn test_write_archive_skips_missing_sources() {
        let store = base_store();
        let plan = assemble(&FinalSelection::new([0], 2), &store).unwrap();
        let mut buf = Vec::new();
        let report =
            write_archive(&plan, &store, Cursor::new(&mut buf), MissingSourcePolicy::Skip).unwrap();

        assert_eq!(report.written, vec![SOUND_DOCUMENT_DEST, "pack.mcmeta", "pack.png"]);
        assert_eq!(report.skipped.len(), SOUND_CATEGORIES.len() + GUI_TEXTURES.len());
        assert!(!report.is_complete());

        let archive = zip::ZipArchive::new(Cursor::new(buf)).unwrap();
        assert_eq!(archive.len(), 3);
    }

    #[test]
    fn test_write_archive_fail_fast() {
        let store = base_store();
        let plan = assemble(&FinalSelection::new([0], 0), &store).unwrap();
        let err = write_archive(
            &plan,
            &store,
            Cursor::new(Vec::new()),
            MissingSourcePolicy::FailFast,
        )
        .unwrap_err();
        assert!(
            matches!(err, PackError::SourceMissing { ref key } if key == "sounds/1yoshino/yoshino_load.ogg")
        );
    }

    #[test]
    fn test_policy_serde_names() {
        assert_eq!(
            serde_json::to_string(&MissingSourcePolicy::FailFast).unwrap(),
            "\"failFast\""
        );
        let parsed: MissingSourcePolicy = serde_json::from_str("\"skip\"").unwrap();
        assert_eq!(parsed, MissingSourcePolicy::Skip);
    }
}
