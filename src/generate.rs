use std::collections::BTreeMap;

use anyhow::Result;
use itertools::Itertools;
use tracing::*;

use crate::canon::{necklace_canonical, reflect_canonical};
use crate::render::{render_smarts, Layer};
use crate::table::LibraryRow;
use crate::vocab::Vocabulary;
use crate::{Core, Name, Position, Skeleton, Tag, TaggedPattern};

/// Ring slots a skeleton fills, every slot except the center.
pub const SKELETON_SLOTS: usize = 4;
/// Most nitrogens a skeleton may contain.
pub const MAX_NITROGENS: usize = 2;
/// Open-position subset sizes enumerated when building masks.
pub const OPEN_COUNTS: [usize; 2] = [2, 3];

/// One deduplicated mask together with the skeleton and core it was built
/// from. Everything in the last two layers derives from this triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskRecord {
    pub skeleton: Skeleton,
    pub core: Core,
    pub mask: TaggedPattern,
}

/// The rendered ancestor strings shared by every row descending from one
/// mask record, rendered once per record.
struct ParentSmarts {
    layer1: String,
    layer2: String,
    layer3: String,
    layer4: String,
}

impl ParentSmarts {
    fn render(record: &MaskRecord, vocab: &Vocabulary) -> Result<Self> {
        let mut anchored = Vec::with_capacity(record.skeleton.len() + 1);
        anchored.push(Position::untagged(vocab.anchor));
        anchored.extend(record.skeleton.iter().map(|t| Position::untagged(*t)));
        let core_pattern: TaggedPattern =
            record.core.iter().map(|t| Position::untagged(*t)).collect();

        Ok(ParentSmarts {
            layer1: render_smarts(&core_pattern, Layer::Generic, vocab)?,
            layer2: render_smarts(&anchored, Layer::Skeleton, vocab)?,
            layer3: render_smarts(&core_pattern, Layer::Core, vocab)?,
            layer4: render_smarts(&record.mask, Layer::Mask, vocab)?,
        })
    }
}

/// Enumerates every 4-slot composition over the ring alphabet, drops those
/// with too many nitrogens, and keeps one skeleton per reflection orbit, the
/// first one generated.
pub fn generate_skeletons(vocab: &Vocabulary) -> Vec<Skeleton> {
    let alphabet = vocab.ring_alphabet();
    let mut orbits: BTreeMap<Skeleton, Skeleton> = BTreeMap::new();
    let mut candidates = 0;
    for skeleton in (0..SKELETON_SLOTS)
        .map(|_| alphabet.iter().copied())
        .multi_cartesian_product()
    {
        candidates += 1;
        let nitrogens = skeleton
            .iter()
            .filter(|token| **token == vocab.ring_nitrogen)
            .count();
        if nitrogens > MAX_NITROGENS {
            continue;
        }
        orbits.entry(reflect_canonical(&skeleton)).or_insert(skeleton);
    }

    let skeletons: Vec<Skeleton> = orbits.into_values().collect();
    info!(
        "Kept {} skeleton compositions out of {} candidates",
        skeletons.len(),
        candidates
    );
    skeletons
}

/// Prepends each center atom to each skeleton, closing the five-slot cores.
pub fn attach_centers(skeletons: &[Skeleton], vocab: &Vocabulary) -> Vec<(Skeleton, Core)> {
    let mut cores = Vec::with_capacity(skeletons.len() * vocab.centers.len());
    for skeleton in skeletons {
        for center in vocab.centers {
            let mut core = Core::with_capacity(skeleton.len() + 1);
            core.push(center);
            core.extend(skeleton.iter().copied());
            cores.push((skeleton.clone(), core));
        }
    }
    info!("Attached centers to form {} cores", cores.len());
    cores
}

/// Builds every hydrogen/open mask over every core and collapses them to one
/// record per dihedral orbit, first encountered wins.
///
/// The same physical ring shows up once per rotation and once per equivalent
/// (skeleton, center) split; the dedup folds all of those together.
pub fn generate_masks(cores: &[(Skeleton, Core)]) -> Vec<MaskRecord> {
    let mut orbits: BTreeMap<TaggedPattern, MaskRecord> = BTreeMap::new();
    let mut built = 0;
    for (skeleton, core) in cores {
        let marker_slots: Vec<usize> = core
            .iter()
            .enumerate()
            .filter(|(_, token)| token.open_valence)
            .map(|(slot, _)| slot)
            .collect();
        for k in OPEN_COUNTS {
            if marker_slots.len() < k {
                continue;
            }
            for open_slots in marker_slots.iter().copied().combinations(k) {
                let mask: TaggedPattern = core
                    .iter()
                    .enumerate()
                    .map(|(slot, token)| {
                        let tag = if open_slots.contains(&slot) {
                            Tag::Open
                        } else if token.open_valence {
                            Tag::Hydrogen
                        } else {
                            Tag::None
                        };
                        Position { token: *token, tag }
                    })
                    .collect();
                built += 1;
                orbits
                    .entry(necklace_canonical(&mask))
                    .or_insert_with(|| MaskRecord {
                        skeleton: skeleton.clone(),
                        core: core.clone(),
                        mask,
                    });
            }
        }
    }

    let records: Vec<MaskRecord> = orbits.into_values().collect();
    info!("Collapsed {} masks into {} unique records", built, records.len());
    records
}

/// Assigns every substituent combination to every record's open slots,
/// renders the finished patterns, and keeps one row per dihedral orbit.
///
/// The four ancestor strings are rendered once per record and shared by
/// every row the record produces, up to a thousand assignments.
pub fn generate_rows(records: &[MaskRecord], vocab: &Vocabulary) -> Result<Vec<LibraryRow>> {
    let codes: Vec<Name> = vocab.catalog.keys().cloned().collect();
    let mut rows: BTreeMap<TaggedPattern, LibraryRow> = BTreeMap::new();
    let mut assignments = 0;
    for record in records {
        let parents = ParentSmarts::render(record, vocab)?;
        let open_slots: Vec<usize> = record
            .mask
            .iter()
            .enumerate()
            .filter(|(_, position)| position.tag == Tag::Open)
            .map(|(slot, _)| slot)
            .collect();
        for labels in (0..open_slots.len())
            .map(|_| codes.iter().cloned())
            .multi_cartesian_product()
        {
            assignments += 1;
            let mut final_pattern = record.mask.clone();
            for (&slot, code) in open_slots.iter().zip(labels) {
                final_pattern[slot].tag = Tag::Substituent(code);
            }
            let key = necklace_canonical(&final_pattern);
            if rows.contains_key(&key) {
                continue;
            }
            let layer5 = render_smarts(&final_pattern, Layer::Substituted, vocab)?;
            rows.insert(
                key,
                LibraryRow {
                    layer1_smarts: parents.layer1.clone(),
                    layer2_smarts: parents.layer2.clone(),
                    layer3_smarts: parents.layer3.clone(),
                    layer4_smarts: parents.layer4.clone(),
                    layer5_smarts: layer5,
                },
            );
        }
    }

    info!(
        "Collapsed {} substituent assignments into {} unique rows",
        assignments,
        rows.len()
    );
    Ok(rows.into_values().collect())
}

/// Runs the full pipeline over a vocabulary and returns the sorted library.
pub fn generate_library(vocab: &Vocabulary) -> Result<Vec<LibraryRow>> {
    let skeletons = generate_skeletons(vocab);
    let cores = attach_centers(&skeletons, vocab);
    let records = generate_masks(&cores);
    let mut rows = generate_rows(&records, vocab)?;
    rows.sort();
    Ok(rows)
}
