use iced_media_picker::app::{App, Options, WINDOW_SIZE};
use std::path::PathBuf;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let options = Options {
        columns: args.opt_value_from_str("--columns").unwrap(),
        show_filenames: args.contains("--filenames"),
        single_select: args.contains("--select-one"),
        directory: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok())
            .map(PathBuf::from),
    };

    iced::application(move || App::new(options.clone()), App::update, App::view)
        .title(App::title)
        .subscription(App::subscription)
        .window_size(WINDOW_SIZE)
        .run()
}
