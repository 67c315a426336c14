use memento::{History, ImageEditor};

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut editor = ImageEditor::new(1920, 1080);
    let mut history = History::new();

    history.backup(&editor);
    println!("{editor}");

    editor.apply_brightness(20);
    history.backup(&editor);
    editor.apply_filter("Sepia");
    history.backup(&editor);
    editor.rotate(90.0);
    history.backup(&editor);
    // The crop is not backed up.
    editor.crop(1280, 720);
    println!("{editor}");

    println!("{}", history.display());

    for _ in 0..3 {
        history.undo(&mut editor);
        println!("{editor}");
    }

    for label in history.show_history() {
        println!("{label}");
    }
}
