// SPDX-License-Identifier: MPL-2.0
//! Picker component encapsulating fetch, selection, and layout state.
//!
//! The controller follows the update-loop idiom: [`State::update`] handles
//! a [`Message`], returns a [`Task`] for any asynchronous follow-up work,
//! and an [`Effect`] the embedding application should act on. Selection
//! changes surface as effects rather than stored callbacks.

use crate::media::{
    permission, MediaProvider, MediaRecord, Page, PageRequest, PermissionProvider, PlatformKind,
    ProviderError,
};
use crate::picker::config::PickerConfig;
use crate::picker::cursor::PaginationCursor;
use crate::picker::rows::RowMatrix;
use crate::picker::selection::SelectionSet;
use crate::picker::view;
use iced::widget::image;
use iced::widget::scrollable::Viewport;
use iced::{time, Element, Subscription, Task};
use std::collections::HashMap;
use std::f32::consts::TAU;
use std::sync::Arc;
use std::time::Duration;

/// Records requested per fetch.
pub const PAGE_SIZE: usize = 100;

/// Fraction of the scroll range past which the next page is requested.
const END_REACHED_FRACTION: f32 = 0.95;

/// Spinner advance per animation tick, in radians.
const SPINNER_STEP: f32 = 0.35;

/// Spinner animation tick interval.
const SPINNER_TICK: Duration = Duration::from_millis(50);

/// Display phase of the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Resolving permissions and waiting for the first page.
    Initializing,
    /// Media-read permission was denied. Terminal.
    PermissionDenied,
    /// The grid is live.
    Ready,
}

/// Messages handled by the picker.
#[derive(Debug, Clone)]
pub enum Message {
    /// Permission acquisition finished.
    PermissionResolved(bool),
    /// A page fetch finished.
    PageLoaded(Result<Page, ProviderError>),
    /// A tile was pressed.
    TilePressed(MediaRecord),
    /// The grid scrollable moved.
    Scrolled(Viewport),
    /// The available layout width became known. Only the first
    /// measurement counts; the tile size is fixed at mount.
    ContainerMeasured(f32),
    /// Advance the loading spinner.
    SpinnerTick,
}

/// Side effects the embedding application should perform after an update.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// The selection toggle ran. Emitted on every toggle, including one
    /// rejected at the selection cap.
    SelectionChanged {
        /// The full selection after the toggle.
        selection: Vec<MediaRecord>,
        /// The record the toggle was applied to.
        changed: MediaRecord,
    },
    /// A page fetch failed. State is unchanged; the next end-reached
    /// scroll retries.
    LoadFailed { error: ProviderError },
}

/// Picker state: accumulated records, selection, pagination, and layout.
pub struct State {
    config: PickerConfig,
    provider: Arc<dyn MediaProvider>,
    platform: PlatformKind,
    phase: Phase,
    /// Append-only list of fetched records, newest first within each page.
    records: Vec<MediaRecord>,
    rows: RowMatrix,
    selection: SelectionSet,
    /// Last externally supplied selection value, compared by value to
    /// avoid redundant sync updates.
    last_synced: Vec<MediaRecord>,
    cursor: PaginationCursor,
    /// Guards against overlapping fetches.
    loading_more: bool,
    /// One-shot tile side length; `None` until the layout is measured.
    tile_size: Option<f32>,
    spinner_rotation: f32,
    /// Thumbnail handles keyed by record URI, created on append so the
    /// renderer never re-decodes on a view pass.
    thumbnails: HashMap<String, image::Handle>,
}

impl State {
    /// Creates the picker and its boot task.
    ///
    /// On gated platforms the task resolves permissions first; otherwise
    /// it starts the first fetch immediately.
    pub fn new(
        config: PickerConfig,
        provider: Arc<dyn MediaProvider>,
        permissions: Arc<dyn PermissionProvider>,
        platform: PlatformKind,
    ) -> (Self, Task<Message>) {
        let tile_size = config.container_width.map(|width| config.tile_size(width));
        let selection = SelectionSet::from_records(config.initial_selection.clone());
        let last_synced = config.initial_selection.clone();

        let mut state = Self {
            config,
            provider,
            platform,
            phase: Phase::Initializing,
            records: Vec::new(),
            rows: RowMatrix::default(),
            selection,
            last_synced,
            cursor: PaginationCursor::default(),
            loading_more: false,
            tile_size,
            spinner_rotation: 0.0,
            thumbnails: HashMap::new(),
        };

        let task = if platform.is_gated() {
            Task::perform(
                permission::acquire_media_read(permissions, platform),
                Message::PermissionResolved,
            )
        } else {
            state.begin_fetch()
        };

        (state, task)
    }

    /// Handles a message; returns the follow-up task and the effect the
    /// embedding application should perform.
    pub fn update(&mut self, message: Message) -> (Task<Message>, Effect) {
        match message {
            Message::PermissionResolved(granted) => {
                if granted {
                    (self.begin_fetch(), Effect::None)
                } else {
                    self.phase = Phase::PermissionDenied;
                    (Task::none(), Effect::None)
                }
            }
            Message::PageLoaded(Ok(page)) => {
                self.apply_page(page);
                (Task::none(), Effect::None)
            }
            Message::PageLoaded(Err(error)) => {
                eprintln!("Failed to fetch media page: {}", error);
                self.apply_fetch_error();
                (Task::none(), Effect::LoadFailed { error })
            }
            Message::TilePressed(record) => {
                let effect = self.toggle_selection(record);
                (Task::none(), effect)
            }
            Message::Scrolled(viewport) => {
                if viewport.relative_offset().y >= END_REACHED_FRACTION {
                    (self.on_end_reached(), Effect::None)
                } else {
                    (Task::none(), Effect::None)
                }
            }
            Message::ContainerMeasured(width) => {
                if self.tile_size.is_none() {
                    self.tile_size = Some(self.config.tile_size(width));
                }
                (Task::none(), Effect::None)
            }
            Message::SpinnerTick => {
                self.spinner_rotation = (self.spinner_rotation + SPINNER_STEP) % TAU;
                (Task::none(), Effect::None)
            }
        }
    }

    /// Renders the picker.
    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    /// Animates the loading spinner while a fetch is outstanding.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.is_fetching() {
            time::every(SPINNER_TICK).map(|_| Message::SpinnerTick)
        } else {
            Subscription::none()
        }
    }

    /// Replaces the selection with an externally supplied value.
    ///
    /// The sync is one-directional and guarded by value comparison against
    /// the last synced input: passing the same value again is a no-op even
    /// if the user has toggled records since, which is what breaks
    /// feedback loops between the picker and its embedder. Never emits a
    /// selection-changed effect.
    pub fn sync_selection(&mut self, external: Vec<MediaRecord>) {
        if external != self.last_synced {
            self.last_synced = external.clone();
            self.selection = SelectionSet::from_records(external);
        }
    }

    /// The current selection, in selection order.
    #[must_use]
    pub fn selection(&self) -> &[MediaRecord] {
        self.selection.records()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// One-shot tile side length, once measured.
    #[must_use]
    pub fn tile_size(&self) -> Option<f32> {
        self.tile_size
    }

    #[must_use]
    pub fn rows(&self) -> &RowMatrix {
        &self.rows
    }

    #[must_use]
    pub fn is_selected(&self, uri: &str) -> bool {
        self.selection.contains_uri(uri)
    }

    /// Whether the provider has reported the end of the library.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.cursor.is_exhausted()
    }

    /// Whether a permission resolution or page fetch is outstanding.
    #[must_use]
    pub fn is_fetching(&self) -> bool {
        self.loading_more || (self.phase == Phase::Initializing && !self.cursor.is_exhausted())
    }

    pub(crate) fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }

    /// Thumbnail handle for a record; cached handles are created when the
    /// record is appended.
    pub(crate) fn thumbnail(&self, record: &MediaRecord) -> image::Handle {
        self.thumbnails
            .get(&record.uri)
            .cloned()
            .unwrap_or_else(|| image::Handle::from_path(record.as_path()))
    }

    /// Builds the next page request, or `None` while a fetch is in flight
    /// or the cursor is exhausted.
    fn next_page_request(&self) -> Option<PageRequest> {
        if self.loading_more || self.cursor.is_exhausted() {
            return None;
        }
        let group_filter = if self.platform.supports_group_filter() {
            self.config.group_filter
        } else {
            None
        };
        Some(PageRequest {
            cursor: self.cursor.token().map(str::to_string),
            page_size: PAGE_SIZE,
            group_filter,
            asset_type: self.config.asset_type,
            include_playable_duration: true,
        })
    }

    fn begin_fetch(&mut self) -> Task<Message> {
        match self.next_page_request() {
            Some(request) => {
                self.loading_more = true;
                Task::perform(self.provider.fetch_page(request), Message::PageLoaded)
            }
            None => Task::none(),
        }
    }

    fn on_end_reached(&mut self) -> Task<Message> {
        if self.cursor.is_exhausted() {
            Task::none()
        } else {
            self.begin_fetch()
        }
    }

    /// Applies a fetched page: sort the batch newest-first (provider
    /// ordering is not trusted), drop records without a playable
    /// duration, append, advance the cursor, and rebuild the row matrix.
    /// Records already placed are never re-sorted.
    fn apply_page(&mut self, mut page: Page) {
        self.loading_more = false;

        page.records
            .sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        page.records.retain(MediaRecord::is_playable);

        for record in &page.records {
            self.thumbnails
                .entry(record.uri.clone())
                .or_insert_with(|| image::Handle::from_path(record.as_path()));
        }

        self.records.extend(page.records);
        self.cursor.advance(page.next_cursor, page.has_more);
        self.rows = RowMatrix::compute(&self.records, self.config.items_per_row);

        if self.phase == Phase::Initializing {
            self.phase = Phase::Ready;
        }
    }

    /// Clears the in-flight flag and nothing else; the accumulated list,
    /// cursor, and rows keep their pre-fetch values.
    fn apply_fetch_error(&mut self) {
        self.loading_more = false;
    }

    fn toggle_selection(&mut self, record: MediaRecord) -> Effect {
        self.selection =
            self.selection
                .toggled(&record, self.config.maximum, self.config.single_select);
        // Marker overlays can affect layout, so the matrix is rebuilt on
        // every toggle even though the record list is unchanged.
        self.rows = RowMatrix::compute(&self.records, self.config.items_per_row);
        Effect::SelectionChanged {
            selection: self.selection.to_vec(),
            changed: record,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::{AssetTypeFilter, GroupFilter};
    use crate::test_utils::{image_record, video_record, StaticPermissions, StubProvider};

    fn new_state(config: PickerConfig, platform: PlatformKind) -> State {
        let (state, _task) = State::new(
            config,
            Arc::new(StubProvider::empty()),
            Arc::new(StaticPermissions::granting()),
            platform,
        );
        state
    }

    /// Completes the boot fetch with an empty open-ended page so the
    /// in-flight guard is released.
    fn settle(state: &mut State) {
        state.apply_page(Page {
            records: vec![],
            next_cursor: None,
            has_more: true,
        });
    }

    fn page(records: Vec<MediaRecord>, next_cursor: &str, has_more: bool) -> Page {
        Page {
            records,
            next_cursor: Some(next_cursor.to_string()),
            has_more,
        }
    }

    #[test]
    fn first_request_has_no_cursor_and_asks_for_duration() {
        let mut state = new_state(PickerConfig::default(), PlatformKind::Unrestricted);
        settle(&mut state);

        let request = state.next_page_request().expect("request");
        assert_eq!(request.cursor, None);
        assert_eq!(request.page_size, PAGE_SIZE);
        assert!(request.include_playable_duration);
        assert_eq!(request.group_filter, Some(GroupFilter::SavedPhotos));
        assert_eq!(request.asset_type, AssetTypeFilter::Photos);
    }

    #[test]
    fn gated_platform_drops_the_group_filter() {
        let state = new_state(PickerConfig::default(), PlatformKind::GatedSplit);
        let request = state.next_page_request().expect("request");
        assert_eq!(request.group_filter, None);
    }

    #[test]
    fn no_request_while_in_flight_or_exhausted() {
        let mut state = new_state(PickerConfig::default(), PlatformKind::Unrestricted);
        // The boot fetch is still outstanding.
        assert!(state.next_page_request().is_none());

        state.apply_page(Page {
            records: vec![],
            next_cursor: None,
            has_more: false,
        });
        assert!(state.is_exhausted());
        assert!(state.next_page_request().is_none());
    }

    #[test]
    fn pages_are_sorted_descending_and_earlier_pages_keep_their_order() {
        let mut state = new_state(PickerConfig::default(), PlatformKind::Unrestricted);

        state.apply_page(page(
            vec![
                image_record("b.jpg", 80),
                image_record("a.jpg", 90),
                image_record("c.jpg", 70),
            ],
            "3",
            true,
        ));
        // Second page is older but arrives unsorted too; it must not
        // disturb the already-placed run.
        state.apply_page(page(
            vec![image_record("e.jpg", 40), image_record("d.jpg", 60)],
            "5",
            false,
        ));

        let names: Vec<&str> = state.records.iter().map(|r| r.file_name()).collect();
        assert_eq!(names, vec!["a.jpg", "b.jpg", "c.jpg", "d.jpg", "e.jpg"]);
        assert!(state.is_exhausted());
        assert_eq!(state.cursor.token(), Some("5"));
    }

    #[test]
    fn videos_without_playable_duration_are_excluded() {
        let mut state = new_state(
            PickerConfig {
                asset_type: AssetTypeFilter::All,
                ..PickerConfig::default()
            },
            PlatformKind::Unrestricted,
        );

        let mut stub = video_record("ddmsrec.mp4", 90);
        stub.has_playable_duration = false;
        state.apply_page(page(
            vec![stub, video_record("clip.mp4", 80), image_record("a.jpg", 70)],
            "3",
            true,
        ));

        let names: Vec<&str> = state.records.iter().map(|r| r.file_name()).collect();
        assert_eq!(names, vec!["clip.mp4", "a.jpg"]);
    }

    #[test]
    fn fetch_error_leaves_state_unchanged_and_allows_retry() {
        let mut state = new_state(PickerConfig::default(), PlatformKind::Unrestricted);
        settle(&mut state);
        state.apply_page(page(vec![image_record("a.jpg", 90)], "1", true));

        let records_before = state.records.clone();
        let cursor_before = state.cursor.clone();
        let rows_before = state.rows.clone();

        let (_, effect) = state.update(Message::PageLoaded(Err(ProviderError::Io(
            "disk gone".into(),
        ))));

        assert_eq!(
            effect,
            Effect::LoadFailed {
                error: ProviderError::Io("disk gone".into())
            }
        );
        assert_eq!(state.records, records_before);
        assert_eq!(state.cursor, cursor_before);
        assert_eq!(state.rows, rows_before);
        // The guard is released so the next end-reached scroll can retry.
        assert!(state.next_page_request().is_some());
    }

    #[test]
    fn toggle_emits_effect_even_when_rejected_at_the_cap() {
        let mut state = new_state(
            PickerConfig {
                maximum: 2,
                ..PickerConfig::default()
            },
            PlatformKind::Unrestricted,
        );
        let a = image_record("a.jpg", 90);
        let b = image_record("b.jpg", 80);
        let c = image_record("c.jpg", 70);

        let (_, first) = state.update(Message::TilePressed(a.clone()));
        assert_eq!(
            first,
            Effect::SelectionChanged {
                selection: vec![a.clone()],
                changed: a.clone()
            }
        );

        let (_, second) = state.update(Message::TilePressed(b.clone()));
        assert_eq!(
            second,
            Effect::SelectionChanged {
                selection: vec![a.clone(), b.clone()],
                changed: b.clone()
            }
        );

        // C is rejected at the cap but the effect still fires, carrying
        // the unchanged selection.
        let (_, third) = state.update(Message::TilePressed(c.clone()));
        assert_eq!(
            third,
            Effect::SelectionChanged {
                selection: vec![a, b],
                changed: c
            }
        );
    }

    #[test]
    fn toggling_twice_restores_the_selection() {
        let mut state = new_state(PickerConfig::default(), PlatformKind::Unrestricted);
        let a = image_record("a.jpg", 90);

        let before: Vec<MediaRecord> = state.selection().to_vec();
        state.update(Message::TilePressed(a.clone()));
        state.update(Message::TilePressed(a));
        assert_eq!(state.selection(), before.as_slice());
    }

    #[test]
    fn single_select_replaces_the_previous_selection() {
        let mut state = new_state(
            PickerConfig {
                single_select: true,
                ..PickerConfig::default()
            },
            PlatformKind::Unrestricted,
        );
        let a = image_record("a.jpg", 90);
        let b = image_record("b.jpg", 80);

        state.update(Message::TilePressed(a));
        state.update(Message::TilePressed(b.clone()));
        assert_eq!(state.selection(), &[b]);
    }

    #[test]
    fn external_sync_replaces_selection_without_an_effect() {
        let a = image_record("a.jpg", 90);
        let b = image_record("b.jpg", 80);
        let mut state = new_state(
            PickerConfig {
                initial_selection: vec![a.clone()],
                ..PickerConfig::default()
            },
            PlatformKind::Unrestricted,
        );
        assert_eq!(state.selection(), &[a.clone()]);

        state.sync_selection(vec![a.clone(), b.clone()]);
        assert_eq!(state.selection(), &[a, b]);
    }

    #[test]
    fn repeating_the_synced_value_does_not_clobber_user_toggles() {
        let a = image_record("a.jpg", 90);
        let b = image_record("b.jpg", 80);
        let mut state = new_state(
            PickerConfig {
                initial_selection: vec![a.clone()],
                ..PickerConfig::default()
            },
            PlatformKind::Unrestricted,
        );

        state.update(Message::TilePressed(b.clone()));
        assert_eq!(state.selection().len(), 2);

        // The embedder re-sends the value it last supplied; comparing
        // against the last synced value (not the live selection) keeps
        // this from looping the picker back to [a].
        state.sync_selection(vec![a]);
        assert_eq!(state.selection().len(), 2);
    }

    #[test]
    fn container_measurement_is_one_shot() {
        let mut state = new_state(PickerConfig::default(), PlatformKind::Unrestricted);
        assert_eq!(state.tile_size(), None);

        state.update(Message::ContainerMeasured(320.0));
        let first = state.tile_size().expect("measured");

        state.update(Message::ContainerMeasured(620.0));
        assert_eq!(state.tile_size(), Some(first));
    }

    #[test]
    fn configured_width_fixes_the_tile_size_at_construction() {
        let mut state = new_state(
            PickerConfig {
                container_width: Some(320.0),
                ..PickerConfig::default()
            },
            PlatformKind::Unrestricted,
        );
        let configured = state.tile_size().expect("configured");

        state.update(Message::ContainerMeasured(620.0));
        assert_eq!(state.tile_size(), Some(configured));
    }

    #[test]
    fn permission_denial_is_terminal_and_fetches_nothing() {
        let mut state = new_state(PickerConfig::default(), PlatformKind::GatedCombined);
        assert_eq!(state.phase(), Phase::Initializing);

        let (_, effect) = state.update(Message::PermissionResolved(false));
        assert_eq!(effect, Effect::None);
        assert_eq!(state.phase(), Phase::PermissionDenied);
        assert!(state.records.is_empty());
    }

    #[test]
    fn permission_grant_starts_the_first_fetch() {
        let mut state = new_state(PickerConfig::default(), PlatformKind::GatedCombined);
        state.update(Message::PermissionResolved(true));
        assert!(state.loading_more);
    }

    #[test]
    fn seven_records_chunk_into_three_rows() {
        let mut state = new_state(PickerConfig::default(), PlatformKind::Unrestricted);
        let records: Vec<MediaRecord> = (0..7u64)
            .map(|i| image_record(&format!("{i}.jpg"), 90 - i))
            .collect();
        state.apply_page(page(records, "7", false));

        let rows = state.rows().rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].iter().filter(|slot| slot.is_some()).count(), 1);
    }
}
