// tests/integration_tests/sample_loading_test.rs
use super::common::{create_test_file, setup_sample_directory};
use anyhow::Result;
use charfit::collect_samples;
use glob::Pattern;

#[test]
fn test_sample_loading() -> Result<()> {
    let temp_dir = setup_sample_directory()?;
    let exclude = vec![Pattern::new("*.toml")?];

    let samples = collect_samples(&temp_dir.path().to_path_buf(), &exclude)?;

    assert_eq!(samples.main.len(), 2, "Hidden and excluded files are skipped");
    assert!(samples.main.contains_key("greeting.txt"));
    assert_eq!(samples.languages.len(), 1);

    let (code, dataset) = &samples.languages[0];
    assert_eq!(code, "de");
    assert_eq!(
        dataset.get("greeting_de.txt").map(String::as_str),
        Some("hallo schoene Welt"),
        "Frontmatter is stripped from the analyzed body"
    );
    Ok(())
}

#[test]
fn test_sample_loading_without_excludes_counts_width_table() -> Result<()> {
    let temp_dir = setup_sample_directory()?;

    let samples = collect_samples(&temp_dir.path().to_path_buf(), &[])?;
    assert!(
        samples.main.contains_key("widths.toml"),
        "Only the exclude patterns keep config files out"
    );
    Ok(())
}

#[test]
fn test_sample_loading_groups_language_files() -> Result<()> {
    let temp_dir = setup_sample_directory()?;
    create_test_file(
        temp_dir.path(),
        "second_de.txt",
        "---\nlang: de\n---\nnoch ein Beispiel",
    )?;
    create_test_file(temp_dir.path(), "first_fr.txt", "---\nlang: fr\n---\nbonjour")?;

    let samples = collect_samples(&temp_dir.path().to_path_buf(), &[Pattern::new("*.toml")?])?;

    assert_eq!(samples.languages.len(), 2);
    let de = samples
        .languages
        .iter()
        .find(|(code, _)| code == "de")
        .map(|(_, dataset)| dataset)
        .unwrap();
    assert_eq!(de.len(), 2, "Samples with the same lang code share a dataset");
    Ok(())
}
