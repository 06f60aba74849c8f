mod common;

use catalog_import::config::{read_config, write_config, ImportConfig};
use catalog_import::images::{
    default_mapping, rename_images, ImageError, MappingEntry, RenameOutcome, RenameSummary,
};
use common::{create_test_dir, touch_image};

#[tokio::test]
async fn test_rename_existing_image() {
    let temp_dir = create_test_dir();
    let dir = temp_dir.path();
    touch_image(dir, "imagen1.jpg").await;

    let mapping = vec![MappingEntry::new("imagen1.jpg", "15656416")];
    let outcomes = rename_images(dir, &mapping, false)
        .await
        .expect("Should rename images");

    assert_eq!(
        outcomes,
        vec![RenameOutcome::Renamed {
            old: "imagen1.jpg".to_string(),
            new: "15656416.jpg".to_string(),
        }]
    );
    assert!(dir.join("15656416.jpg").exists());
    assert!(!dir.join("imagen1.jpg").exists());
}

#[tokio::test]
async fn test_missing_image_is_reported_not_failed() {
    let temp_dir = create_test_dir();
    let dir = temp_dir.path();

    let mapping = vec![MappingEntry::new("imagen2.jpg", "2-40-1521")];
    let outcomes = rename_images(dir, &mapping, false)
        .await
        .expect("Missing files should not fail the run");

    assert_eq!(
        outcomes,
        vec![RenameOutcome::NotFound {
            old: "imagen2.jpg".to_string()
        }]
    );
    assert!(!dir.join("2-40-1521.jpg").exists(), "No file should be created");
}

#[tokio::test]
async fn test_outcomes_follow_mapping_order() {
    let temp_dir = create_test_dir();
    let dir = temp_dir.path();
    touch_image(dir, "imagen2.jpg").await;

    let outcomes = rename_images(dir, &default_mapping(), false)
        .await
        .expect("Should rename images");

    assert_eq!(
        outcomes,
        vec![
            RenameOutcome::NotFound {
                old: "imagen1.jpg".to_string()
            },
            RenameOutcome::Renamed {
                old: "imagen2.jpg".to_string(),
                new: "2-40-1521.jpg".to_string(),
            },
        ]
    );
}

#[tokio::test]
async fn test_second_run_finds_nothing() {
    let temp_dir = create_test_dir();
    let dir = temp_dir.path();
    touch_image(dir, "imagen1.jpg").await;
    touch_image(dir, "imagen2.jpg").await;

    let first = rename_images(dir, &default_mapping(), false)
        .await
        .expect("First run should succeed");
    assert_eq!(RenameSummary::from_outcomes(&first).renamed, 2);

    let second = rename_images(dir, &default_mapping(), false)
        .await
        .expect("Second run should succeed");
    let summary = RenameSummary::from_outcomes(&second);
    assert_eq!(summary.renamed, 0);
    assert_eq!(summary.not_found, 2);

    assert!(dir.join("15656416.jpg").exists());
    assert!(dir.join("2-40-1521.jpg").exists());
}

#[tokio::test]
async fn test_dry_run_touches_nothing() {
    let temp_dir = create_test_dir();
    let dir = temp_dir.path();
    touch_image(dir, "imagen1.jpg").await;

    let outcomes = rename_images(dir, &default_mapping(), true)
        .await
        .expect("Dry run should succeed");

    assert_eq!(
        RenameSummary::from_outcomes(&outcomes),
        RenameSummary {
            renamed: 0,
            would_rename: 1,
            not_found: 1,
        }
    );
    assert!(dir.join("imagen1.jpg").exists());
    assert!(!dir.join("15656416.jpg").exists());
}

#[tokio::test]
async fn test_existence_checked_per_entry() {
    let temp_dir = create_test_dir();
    let dir = temp_dir.path();
    touch_image(dir, "a.jpg").await;

    // The second entry's source only exists once the first has been renamed
    let mapping = vec![MappingEntry::new("a.jpg", "b"), MappingEntry::new("b.jpg", "c")];
    let outcomes = rename_images(dir, &mapping, false)
        .await
        .expect("Should rename images");

    assert_eq!(RenameSummary::from_outcomes(&outcomes).renamed, 2);
    assert!(dir.join("c.jpg").exists());
    assert!(!dir.join("a.jpg").exists());
    assert!(!dir.join("b.jpg").exists());
}

#[tokio::test]
async fn test_config_mapping_drives_rename() {
    let temp_dir = create_test_dir();
    let dir = temp_dir.path();
    touch_image(dir, "foto-frontal.jpg").await;

    let config_path = dir.join("catalog-import.json");
    let config = ImportConfig {
        image_dir: dir.to_path_buf(),
        image_mapping: vec![MappingEntry::new("foto-frontal.jpg", "99-1")],
        ..Default::default()
    };
    write_config(&config_path, &config)
        .await
        .expect("Should write config");

    let loaded = read_config(&config_path)
        .await
        .expect("Should read config")
        .expect("Config should exist");
    assert_eq!(loaded, config);

    rename_images(&loaded.image_dir, &loaded.image_mapping, false)
        .await
        .expect("Should rename images");
    assert!(dir.join("99-1.jpg").exists());
}

#[tokio::test]
async fn test_dry_run_matches_real_run_for_chained_mapping() {
    let temp_dir = create_test_dir();
    let dir = temp_dir.path();
    touch_image(dir, "a.jpg").await;

    let mapping = vec![MappingEntry::new("a.jpg", "b"), MappingEntry::new("b.jpg", "c")];

    let preview = rename_images(dir, &mapping, true)
        .await
        .expect("Dry run should succeed");
    assert_eq!(
        preview,
        vec![
            RenameOutcome::WouldRename {
                old: "a.jpg".to_string(),
                new: "b.jpg".to_string(),
            },
            RenameOutcome::WouldRename {
                old: "b.jpg".to_string(),
                new: "c.jpg".to_string(),
            },
        ]
    );
    assert!(dir.join("a.jpg").exists(), "Dry run should not touch files");

    let outcomes = rename_images(dir, &mapping, false)
        .await
        .expect("Should rename images");
    let preview_summary = RenameSummary::from_outcomes(&preview);
    let summary = RenameSummary::from_outcomes(&outcomes);
    assert_eq!(preview_summary.would_rename, summary.renamed);
    assert_eq!(preview_summary.not_found, summary.not_found);
}

#[cfg(unix)]
#[tokio::test]
async fn test_unreadable_source_aborts_instead_of_not_found() {
    let temp_dir = create_test_dir();
    let dir = temp_dir.path();
    let looped = dir.join("imagen1.jpg");
    tokio::fs::symlink(&looped, &looped)
        .await
        .expect("Should create symlink");

    let mapping = vec![MappingEntry::new("imagen1.jpg", "15656416")];
    let result = rename_images(dir, &mapping, false).await;

    assert!(matches!(result, Err(ImageError::IoError(_))));
    assert!(!dir.join("15656416.jpg").exists());
}
