use super::*;
use crate::config::{FolderSettings, Settings, TrackSettings};
use crate::library::Item;

fn folder(route: &str) -> FolderSettings {
    FolderSettings {
        route: route.to_string(),
        ..FolderSettings::default()
    }
}

fn track(id: &str) -> TrackSettings {
    TrackSettings {
        id: id.to_string(),
        title: id.to_uppercase(),
        uri: format!("https://example.com/{id}.mp3"),
        ..TrackSettings::default()
    }
}

fn ids(items: &[Item]) -> Vec<&str> {
    items.iter().map(|i| i.id()).collect()
}

#[test]
fn default_sources_are_root_music_playlists() {
    let sources = default_sources();
    let routes: Vec<&str> = sources.iter().map(|s| s.route()).collect();
    assert_eq!(routes, vec!["", "music", "playlists"]);
    assert!(sources[0].is_root());

    let root_items = sources[0].produce();
    assert_eq!(ids(&root_items), vec!["music", "playlists"]);
    assert_eq!(root_items[0].title(), "Music");
    assert!(root_items.iter().all(|i| i.is_browsable()));

    let music = sources[1].produce();
    assert_eq!(ids(&music), vec!["track_1", "track_2"]);
    assert_eq!(music[0].title(), "Android Spot (15 sec)");
    assert!(music.iter().all(|i| i.is_playable()));

    assert!(sources[2].produce().is_empty());
}

#[test]
fn producers_return_equal_items_on_every_call() {
    let sources = default_sources();
    assert_eq!(sources[1].produce(), sources[1].produce());
}

#[test]
fn closures_are_producers() {
    let source = CatalogSource::folder("news", || {
        vec![Item::track("n1", "Morning", "https://example.com/n1.mp3").unwrap()]
    });
    assert_eq!(ids(&source.produce()), vec!["n1"]);
    assert!(!source.is_root());
    assert_eq!(source.title(), None);
}

#[test]
fn nested_folders_list_sub_folders_before_tracks() {
    let mut music = folder("music");
    music.tracks.push(track("loose"));
    let mut rock = folder("rock");
    rock.tracks.push(track("r1"));
    music.folders.push(rock);
    let mut jazz = folder("jazz");
    jazz.title = Some("Smooth Jazz".to_string());
    music.folders.push(jazz);

    let settings = Settings {
        folders: vec![music],
        ..Settings::default()
    };
    let sources = sources_from_settings(&settings);
    assert_eq!(sources.len(), 2);

    let music = &sources[1];
    let items = music.produce();
    assert_eq!(ids(&items), vec!["music/rock", "music/jazz", "loose"]);
    assert_eq!(items[0].title(), "Rock");
    assert_eq!(items[1].title(), "Smooth Jazz");

    let children: Vec<&str> = music.children().iter().map(|c| c.route()).collect();
    assert_eq!(children, vec!["rock", "jazz"]);
    assert_eq!(music.children()[1].title(), Some("Smooth Jazz"));
    assert_eq!(ids(&music.children()[0].produce()), vec!["r1"]);
}

#[test]
fn configured_track_metadata_is_carried_over() {
    let mut f = folder("podcasts");
    f.tracks.push(TrackSettings {
        artist: Some("Host".to_string()),
        album: Some("Season 1".to_string()),
        ..track("ep1")
    });

    let settings = Settings {
        folders: vec![f],
        ..Settings::default()
    };
    let sources = sources_from_settings(&settings);
    let items = sources[1].produce();
    assert_eq!(items[0].artist(), Some("Host"));
    assert_eq!(items[0].album(), Some("Season 1"));
    assert_eq!(items[0].source_locator(), Some("https://example.com/ep1.mp3"));
}

#[test]
fn tracks_without_uri_are_skipped() {
    let mut f = folder("music");
    f.tracks.push(TrackSettings {
        uri: String::new(),
        ..track("broken")
    });
    f.tracks.push(track("ok"));

    let settings = Settings {
        folders: vec![f],
        ..Settings::default()
    };
    let sources = sources_from_settings(&settings);
    assert_eq!(ids(&sources[1].produce()), vec!["ok"]);
}

#[test]
fn scan_dir_tracks_follow_configured_tracks() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("local.mp3"), b"not real").unwrap();

    let mut f = folder("music");
    f.tracks.push(track("remote"));
    f.scan_dir = Some(dir.path().to_path_buf());

    let settings = Settings {
        folders: vec![f],
        ..Settings::default()
    };
    let sources = sources_from_settings(&settings);
    assert_eq!(ids(&sources[1].produce()), vec!["remote", "music/local.mp3"]);
}
