use std::path::PathBuf;

use super::*;
use crate::locator::{Candidate, LinuxLocator};
use crate::store::MemoryStore;

struct Nothing;

impl DefaultToolLocator for Nothing {
    fn candidates(&self, _tool: Tool) -> Vec<Candidate> {
        Vec::new()
    }

    fn fallback(&self, _tool: Tool) -> Option<String> {
        None
    }
}

struct Only(&'static str);

impl DefaultToolLocator for Only {
    fn candidates(&self, tool: Tool) -> Vec<Candidate> {
        LinuxLocator.candidates(tool)
    }

    fn fallback(&self, _tool: Tool) -> Option<String> {
        None
    }

    fn exists(&self, path: &std::path::Path) -> bool {
        path == std::path::Path::new(self.0)
    }
}

#[test]
fn test_tool_for_extension() {
    assert_eq!(tool_for(&PathBuf::from("/tmp/a.MKV")), Tool::VideoPlayer);
    assert_eq!(tool_for(&PathBuf::from("/tmp/clip.webm")), Tool::VideoPlayer);
    assert_eq!(tool_for(&PathBuf::from("/tmp/notes.txt")), Tool::TextEditor);
    assert_eq!(tool_for(&PathBuf::from("/tmp/Makefile")), Tool::TextEditor);
    assert_eq!(tool_for(&PathBuf::from("/tmp/mp4")), Tool::TextEditor);
}

#[test]
fn test_configured_editor_wins() {
    let store = MemoryStore::with([(EDITOR_KEY, "/usr/bin/vim")]);
    let r = resolve(&store, &Only("/usr/bin/code"), &PathBuf::from("/tmp/a.txt")).unwrap();
    assert_eq!(r.program, "/usr/bin/vim");
    assert!(!r.guessed);
    assert_eq!(r.command_line, "/usr/bin/vim \"/tmp/a.txt\"");
}

#[test]
fn test_guess_when_unconfigured() {
    let store = MemoryStore::new();
    let r = resolve(&store, &Only("/usr/bin/vlc"), &PathBuf::from("/tmp/movie.mp4")).unwrap();
    assert_eq!(r.tool, Tool::VideoPlayer);
    assert_eq!(r.program, "/usr/bin/vlc");
    assert!(r.guessed);
}

#[test]
fn test_video_uses_video_key() {
    let store = MemoryStore::with([(EDITOR_KEY, "vim"), (VIDEO_VIEWER_KEY, "mpv")]);
    let r = resolve(&store, &Nothing, &PathBuf::from("/tmp/movie.avi")).unwrap();
    assert_eq!(r.command_line, "mpv \"/tmp/movie.avi\"");
}

#[test]
fn test_quotes_in_path_are_escaped() {
    let store = MemoryStore::with([(EDITOR_KEY, "gedit")]);
    let r = resolve(&store, &Nothing, &PathBuf::from("/tmp/say \"hi\".txt")).unwrap();
    assert_eq!(r.command_line, "gedit \"/tmp/say \\\"hi\\\".txt\"");
}

#[test]
fn test_nothing_found_is_an_error() {
    let store = MemoryStore::new();
    let err = resolve(&store, &Nothing, &PathBuf::from("/tmp/a.txt")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "No text editor configured. Set one in Preferences."
    );
    let err = resolve(&store, &Nothing, &PathBuf::from("/tmp/a.mov")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "No video viewer configured. Set one in Preferences."
    );
}

#[test]
fn test_image_uses_image_key() {
    assert_eq!(tool_for(&PathBuf::from("/tmp/photo.PNG")), Tool::ImageViewer);
    assert_eq!(tool_for(&PathBuf::from("/tmp/logo.svg")), Tool::ImageViewer);

    let store = MemoryStore::with([(EDITOR_KEY, "gedit"), (IMAGE_VIEWER_KEY, "eog")]);
    let r = resolve(&store, &Nothing, &PathBuf::from("/tmp/photo.png")).unwrap();
    assert_eq!(r.tool, Tool::ImageViewer);
    assert!(!r.guessed);
    assert_eq!(r.command_line, "eog \"/tmp/photo.png\"");
}

#[test]
fn test_unconfigured_image_viewer_is_an_error() {
    let store = MemoryStore::with([(EDITOR_KEY, "gedit")]);
    let err = resolve(&store, &LinuxLocator, &PathBuf::from("/tmp/photo.jpg")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "No image viewer configured. Set one in Preferences."
    );
}
