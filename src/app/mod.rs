// SPDX-License-Identifier: MPL-2.0
//! Demo application: a folder-backed gallery picker.
//!
//! Embeds [`picker::State`] over an [`FsMediaProvider`] for a local
//! directory. The toolbar's folder button swaps the provider by
//! rebuilding the picker, which is the intended teardown/re-init path;
//! selection changes and load failures arrive as picker effects and feed
//! the status line.

pub mod config;

use crate::media::{AlwaysGranted, AssetTypeFilter, FsMediaProvider, PlatformKind};
use crate::picker::{self, PickerConfig};
use iced::widget::{button, text, Column, Container, Row};
use iced::{alignment, window, Element, Length, Size, Subscription, Task};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Initial window size; also the width handed to the picker's one-shot
/// layout measurement.
pub const WINDOW_SIZE: Size = Size {
    width: 960.0,
    height: 720.0,
};

/// Command-line options collected in `main`.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub directory: Option<PathBuf>,
    pub columns: Option<usize>,
    pub show_filenames: bool,
    pub single_select: bool,
}

/// Root state of the demo.
pub struct App {
    picker: picker::State,
    directory: PathBuf,
    options: Options,
    status: String,
}

#[derive(Debug, Clone)]
pub enum Message {
    Picker(picker::Message),
    OpenFolder,
    FolderChosen(Option<PathBuf>),
    Resized(Size),
}

impl App {
    pub fn new(options: Options) -> (Self, Task<Message>) {
        let saved = config::load().unwrap_or_default();
        let directory = options
            .directory
            .clone()
            .or(saved.start_dir)
            .or_else(dirs::picture_dir)
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        let merged = Options {
            columns: options.columns.or(saved.columns),
            show_filenames: options.show_filenames || saved.show_filenames.unwrap_or(false),
            ..options
        };

        let (picker, boot) = build_picker(&merged, &directory);
        let app = Self {
            picker,
            directory,
            options: merged,
            status: String::from("Tap tiles to select media"),
        };

        (app, Task::batch([boot.map(Message::Picker), measure_task()]))
    }

    pub fn title(&self) -> String {
        format!("Media Picker — {}", self.directory.display())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Picker(msg) => {
                let (task, effect) = self.picker.update(msg);
                self.apply_effect(effect);
                task.map(Message::Picker)
            }
            Message::OpenFolder => Task::perform(
                async {
                    rfd::AsyncFileDialog::new()
                        .pick_folder()
                        .await
                        .map(|handle| handle.path().to_path_buf())
                },
                Message::FolderChosen,
            ),
            Message::FolderChosen(Some(path)) => {
                self.directory = path.clone();
                self.remember_directory(path);

                let (picker, boot) = build_picker(&self.options, &self.directory);
                self.picker = picker;
                Task::batch([boot.map(Message::Picker), measure_task()])
            }
            Message::FolderChosen(None) => Task::none(),
            Message::Resized(size) => {
                // One-shot sizing: the picker ignores everything after the
                // first measurement, so forwarding resizes is harmless.
                let (task, _effect) = self
                    .picker
                    .update(picker::Message::ContainerMeasured(size.width));
                task.map(Message::Picker)
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let toolbar = Row::new()
            .spacing(12)
            .padding(8)
            .align_y(alignment::Vertical::Center)
            .push(button(text("Open folder…")).on_press(Message::OpenFolder))
            .push(text(&self.status).size(14));

        Column::new()
            .push(toolbar)
            .push(
                Container::new(self.picker.view().map(Message::Picker))
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            self.picker.subscription().map(Message::Picker),
            window::resize_events().map(|(_id, size)| Message::Resized(size)),
        ])
    }

    fn apply_effect(&mut self, effect: picker::Effect) {
        match effect {
            picker::Effect::None => {}
            picker::Effect::SelectionChanged { selection, changed } => {
                self.status = format!(
                    "{} selected (last: {})",
                    selection.len(),
                    changed.file_name()
                );
            }
            picker::Effect::LoadFailed { error } => {
                self.status = format!("Load failed: {}", error);
            }
        }
    }

    fn remember_directory(&self, path: PathBuf) {
        let mut saved = config::load().unwrap_or_default();
        saved.start_dir = Some(path);
        if let Err(err) = config::save(&saved) {
            eprintln!("Failed to save settings: {}", err);
        }
    }
}

fn build_picker(options: &Options, directory: &Path) -> (picker::State, Task<picker::Message>) {
    let picker_config = PickerConfig {
        items_per_row: options.columns.unwrap_or(picker::config::DEFAULT_ITEMS_PER_ROW),
        show_filenames: options.show_filenames,
        single_select: options.single_select,
        asset_type: AssetTypeFilter::All,
        group_filter: None,
        empty_text: String::from("No media in this folder."),
        ..PickerConfig::default()
    };

    picker::State::new(
        picker_config,
        Arc::new(FsMediaProvider::new(directory.to_path_buf())),
        Arc::new(AlwaysGranted),
        PlatformKind::Unrestricted,
    )
}

fn measure_task() -> Task<Message> {
    Task::done(Message::Picker(picker::Message::ContainerMeasured(
        WINDOW_SIZE.width,
    )))
}
