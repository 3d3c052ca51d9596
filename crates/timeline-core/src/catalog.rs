//! The event catalog and the static map overlays.
//!
//! The catalog is assembled once at startup from hard-coded records and is
//! read-only afterwards. Construction validates id uniqueness and actor
//! tags; years outside 1954–1964 are accepted but logged.

use std::collections::BTreeSet;

use timeline_types::{
    ActorTag, Coordinate, EventRecord, Importance, MapOverlay, OverlayKind, Topic, YEAR_MAX,
    YEAR_MIN,
};
use tracing::warn;

use crate::error::CatalogError;

/// An immutable, validated list of event records in display order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    events: Vec<EventRecord>,
}

impl Catalog {
    /// Validate and wrap a list of records.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if two records share an id or a record has
    /// an empty or repeated actor list.
    pub fn new(events: Vec<EventRecord>) -> Result<Self, CatalogError> {
        let mut seen_ids = BTreeSet::new();

        for event in &events {
            if !seen_ids.insert(event.id.as_str()) {
                return Err(CatalogError::DuplicateId(event.id.clone()));
            }
            if event.actor_tags.is_empty() {
                return Err(CatalogError::NoActors(event.id.clone()));
            }
            let mut seen_actors = BTreeSet::new();
            for actor in &event.actor_tags {
                if !seen_actors.insert(*actor) {
                    return Err(CatalogError::DuplicateActor {
                        id: event.id.clone(),
                        actor: *actor,
                    });
                }
            }
            if !(YEAR_MIN..=YEAR_MAX).contains(&event.year) {
                warn!(id = event.id, year = event.year, "event year outside 1954-1964");
            }
        }

        Ok(Self { events })
    }

    /// The built-in catalog of seven map events.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the hard-coded data is inconsistent.
    pub fn vietnam_1954_1964() -> Result<Self, CatalogError> {
        Self::new(default_events())
    }

    /// All records in catalog order.
    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    /// Look up a record by id.
    pub fn get(&self, id: &str) -> Option<&EventRecord> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Number of records.
    pub const fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the catalog holds no records.
    pub const fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Earliest and latest year in the catalog.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        let min = self.events.iter().map(|e| e.year).min()?;
        let max = self.events.iter().map(|e| e.year).max()?;
        Some((min, max))
    }

    /// Distinct actors appearing anywhere in the catalog.
    pub fn actors(&self) -> BTreeSet<ActorTag> {
        self.events
            .iter()
            .flat_map(|e| e.actor_tags.iter().copied())
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Built-in data
// ---------------------------------------------------------------------------

/// Helper to build an [`EventRecord`].
#[allow(clippy::too_many_arguments)]
fn event(
    id: &str,
    title: &str,
    year: i32,
    summary: &str,
    actors: &[ActorTag],
    topic: Topic,
    coords: (f64, f64),
    importance: Importance,
    source: &str,
) -> EventRecord {
    EventRecord {
        id: id.to_owned(),
        title: title.to_owned(),
        year,
        summary: summary.to_owned(),
        actor_tags: actors.to_vec(),
        topic,
        coordinate: Coordinate::new(coords.0, coords.1),
        source_url: Some(source.to_owned()),
        importance,
    }
}

fn default_events() -> Vec<EventRecord> {
    vec![
        event(
            "geneva-context-1954",
            "Hiệp định Genève 1954",
            1954,
            "Đình chỉ chiến sự; giới tuyến quân sự tạm thời tại vĩ tuyến 17°; dự kiến tổng tuyển cử thống nhất năm 1956.",
            &[ActorTag::North],
            Topic::Diplomacy,
            (21.0278, 105.8342),
            Importance::High,
            "https://vi.wikipedia.org/wiki/Hiệp_định_Genève_1954",
        ),
        event(
            "no-election-1956",
            "Từ chối tổng tuyển cử (1956)",
            1956,
            "VNCH và Mỹ từ chối hiệp thương tổng tuyển cử → tiến trình thống nhất bế tắc.",
            &[ActorTag::South, ActorTag::Us],
            Topic::Legal,
            (10.8231, 106.6297),
            Importance::High,
            "https://vi.wikipedia.org/wiki/Chiến_tranh_Việt_Nam",
        ),
        event(
            "nlf-1960",
            "Thành lập MTDTGP MN (1960)",
            1960,
            "Mặt trận Dân tộc Giải phóng miền Nam ra đời (12/1960); 1961 hình thành Quân Giải phóng.",
            &[ActorTag::Nlf],
            Topic::Politics,
            (11.32, 106.10),
            Importance::High,
            "https://vi.wikipedia.org/wiki/Mặt_trận_Dân_tộc_Giải_phóng_miền_Nam_Việt_Nam",
        ),
        event(
            "special-war-1961",
            "Chiến tranh đặc biệt (1961-1964)",
            1962,
            "Khung tác chiến: cố vấn/viện trợ Mỹ + quân VNCH; bình định, ấp chiến lược tại MN.",
            &[ActorTag::Us, ActorTag::South],
            Topic::Military,
            (12.5, 107.5),
            Importance::Medium,
            "https://vi.wikipedia.org/wiki/Chiến_tranh_Việt_Nam",
        ),
        event(
            "buddhist-1963",
            "Khủng hoảng Phật giáo (1963)",
            1963,
            "Khủng hoảng chính trị-xã hội trầm trọng ở miền Nam, dẫn tới đảo chính 11/1963.",
            &[ActorTag::South],
            Topic::Politics,
            (16.4637, 107.5909),
            Importance::High,
            "https://vi.wikipedia.org/wiki/Cuộc_khủng_hoảng_Phật_giáo_1963",
        ),
        event(
            "tonkin-1964",
            "Sự kiện Vịnh Bắc Bộ (1964)",
            1964,
            "Nghị quyết Vịnh Bắc Bộ của QH Hoa Kỳ mở đường cho mở rộng can dự quân sự trực tiếp.",
            &[ActorTag::Us],
            Topic::Diplomacy,
            (19.5, 107.3),
            Importance::High,
            "https://vi.wikipedia.org/wiki/Sự_kiện_Vịnh_Bắc_Bộ",
        ),
        event(
            "dong-khoi-1960",
            "Phong trào Đồng Khởi (1960)",
            1960,
            "Phong trào nổi dậy lớn ở Bến Tre và các tỉnh ĐBSCL, đánh dấu chuyển pha đấu tranh.",
            &[ActorTag::Nlf],
            Topic::Politics,
            (10.2435, 106.3757),
            Importance::Medium,
            "https://vi.wikipedia.org/wiki/Phong_trào_Đồng_Khởi",
        ),
    ]
}

/// Helper to build a [`MapOverlay`].
fn overlay(id: &str, label: &str, kind: OverlayKind, color: &str, points: &[(f64, f64)]) -> MapOverlay {
    MapOverlay {
        id: id.to_owned(),
        label: label.to_owned(),
        kind,
        points: points
            .iter()
            .map(|&(lat, lon)| Coordinate::new(lat, lon))
            .collect(),
        color: color.to_owned(),
    }
}

/// The static map layers: the 17th-parallel line, the DMZ band and the
/// Ho Chi Minh trail.
pub fn map_overlays() -> Vec<MapOverlay> {
    vec![
        overlay(
            "dmz-line",
            "Vĩ tuyến 17°",
            OverlayKind::Line,
            "#ef4444",
            &[(17.0, 105.7), (17.0, 108.6)],
        ),
        overlay(
            "dmz-band",
            "DMZ",
            OverlayKind::Polygon,
            "#7c3aed",
            &[(17.15, 105.9), (16.85, 105.9), (16.85, 107.5), (17.15, 107.5)],
        ),
        overlay(
            "hcm-trail",
            "Đường mòn HCM",
            OverlayKind::Line,
            "#10b981",
            &[
                (18.2, 105.2),
                (17.6, 105.8),
                (16.7, 106.5),
                (15.9, 107.3),
                (15.2, 107.7),
                (14.5, 107.8),
                (13.8, 108.1),
                (13.0, 108.3),
                (12.2, 108.5),
                (11.5, 108.2),
                (10.8, 107.8),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = Catalog::vietnam_1954_1964();
        assert!(catalog.is_ok());
        let catalog = catalog.unwrap_or_default();
        assert_eq!(catalog.len(), 7);
        assert_eq!(catalog.year_range(), Some((1954, 1964)));
        assert_eq!(catalog.actors().len(), 4);
    }

    #[test]
    fn lookup_by_id() {
        let catalog = Catalog::new(default_events()).unwrap_or_default();
        let tonkin = catalog.get("tonkin-1964");
        assert!(tonkin.is_some_and(|e| e.year == 1964));
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut events = default_events();
        events.extend(default_events().into_iter().take(1));
        let result = Catalog::new(events);
        assert!(matches!(result, Err(CatalogError::DuplicateId(id)) if id == "geneva-context-1954"));
    }

    #[test]
    fn rejects_records_without_actors() {
        let mut events = default_events();
        if let Some(first) = events.first_mut() {
            first.actor_tags.clear();
        }
        assert!(matches!(Catalog::new(events), Err(CatalogError::NoActors(_))));
    }

    #[test]
    fn rejects_repeated_actor() {
        let mut events = default_events();
        if let Some(first) = events.first_mut() {
            first.actor_tags = vec![ActorTag::North, ActorTag::North];
        }
        assert!(matches!(
            Catalog::new(events),
            Err(CatalogError::DuplicateActor { actor: ActorTag::North, .. })
        ));
    }

    #[test]
    fn out_of_range_year_is_accepted() {
        let mut events = default_events();
        if let Some(first) = events.first_mut() {
            first.year = 1975;
        }
        assert!(Catalog::new(events).is_ok());
    }

    #[test]
    fn overlays_have_geometry() {
        let overlays = map_overlays();
        assert_eq!(overlays.len(), 3);
        assert!(overlays.iter().all(|o| o.points.len() >= 2));
        assert!(overlays.iter().any(|o| o.kind == OverlayKind::Polygon));
    }
}
