use assert_cmd::Command;
use flate2::write::GzEncoder;
use flate2::Compression;
use predicates::prelude::*;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use tempfile::{NamedTempFile, TempDir};

fn data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("data")
}

fn feature_finder() -> Command {
    Command::new(env!("CARGO_BIN_EXE_feature-finder"))
}

/// Run the binary on the bundled fixtures with `extra` arguments and compare
/// the output line by line against the golden file.
fn run_golden_test(extra: &[&str], golden_filename: &str) -> Result<(), Box<dyn std::error::Error>> {
    let data_dir = data_dir();
    let golden_path = data_dir.join(golden_filename);

    // Use a temp file for output to avoid polluting source tree
    let output_file = NamedTempFile::new()?;
    let output_path = output_file.path();

    feature_finder()
        .arg("-g")
        .arg(data_dir.join("genes.txt"))
        .arg("-r")
        .arg(data_dir.join("regions.txt"))
        .arg("-o")
        .arg(output_path)
        .args(extra)
        .assert()
        .success();

    let output_reader = BufReader::new(File::open(output_path)?);
    let golden_reader = BufReader::new(File::open(&golden_path)?);

    let mut line_num = 0;
    for (out_line, gold_line) in output_reader.lines().zip(golden_reader.lines()) {
        line_num += 1;
        let out_line = out_line?;
        let gold_line = gold_line?;

        if out_line != gold_line {
            panic!(
                "Mismatch at line {} ({:?}): \nExpected: {}\nActual:   {}",
                line_num, extra, gold_line, out_line
            );
        }
    }

    // Catch extra lines in either file
    let out_len = fs::metadata(output_path)?.len();
    let gold_len = fs::metadata(&golden_path)?.len();
    if out_len != gold_len {
        panic!(
            "File sizes differ ({:?}): Output: {} bytes, Golden: {} bytes",
            extra, out_len, gold_len
        );
    }

    Ok(())
}

#[test]
fn test_golden_output_cursor() -> Result<(), Box<dyn std::error::Error>> {
    run_golden_test(&[], "golden_output.tsv")
}

#[test]
fn test_golden_output_active_set() -> Result<(), Box<dyn std::error::Error>> {
    run_golden_test(&["--strategy", "active-set"], "golden_output.tsv")
}

#[test]
fn test_summary_to_stdout() {
    let data_dir = data_dir();

    feature_finder()
        .arg("-g")
        .arg(data_dir.join("genes.txt"))
        .arg("-r")
        .arg(data_dir.join("regions.txt"))
        .args(["--format", "summary"])
        .assert()
        .success()
        .stdout(
            "Region_40_142 overlaps gs33_99 by 60 base pairs\n\
             Region_1030_2005 overlaps gs1000_2000 by 971 base pairs\n\
             Region_5600_5900 overlaps ENSA by 301 base pairs\n",
        );
}

#[test]
fn test_all_regions_reports_unmatched() {
    let data_dir = data_dir();

    let assert = feature_finder()
        .arg("-g")
        .arg(data_dir.join("genes.txt"))
        .arg("-r")
        .arg(data_dir.join("regions.txt"))
        .arg("--all-regions")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    // header + 5 regions, each matched region has exactly one gene
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[2], "Region_100_200\tchr1\t100\t200\t.\t.\t.\t.\t.\t0");
    assert_eq!(lines[4], "Region_4200_4242\tchr1\t4200\t4242\t.\t.\t.\t.\t.\t0");
}

#[test]
fn test_gzip_inputs() -> Result<(), Box<dyn std::error::Error>> {
    let data_dir = data_dir();
    let tmp = TempDir::new()?;

    let mut gz_paths = Vec::new();
    for name in ["genes.txt", "regions.txt"] {
        let path = tmp.path().join(format!("{}.gz", name));
        let mut encoder = GzEncoder::new(File::create(&path)?, Compression::default());
        encoder.write_all(&fs::read(data_dir.join(name))?)?;
        encoder.finish()?;
        gz_paths.push(path);
    }

    let expected = fs::read_to_string(data_dir.join("golden_output.tsv"))?;
    feature_finder()
        .arg("-g")
        .arg(&gz_paths[0])
        .arg("-r")
        .arg(&gz_paths[1])
        .assert()
        .success()
        .stdout(predicate::str::diff(expected));

    Ok(())
}

#[test]
fn test_missing_gene_file() {
    feature_finder()
        .args(["-g", "does/not/exist.txt"])
        .arg("-r")
        .arg(data_dir().join("regions.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Gene file not found"));
}

#[test]
fn test_invalid_strategy() {
    let data_dir = data_dir();

    feature_finder()
        .arg("-g")
        .arg(data_dir.join("genes.txt"))
        .arg("-r")
        .arg(data_dir.join("regions.txt"))
        .args(["--strategy", "tree"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cursor or active-set"));
}

#[test]
fn test_gene_file_without_header() -> Result<(), Box<dyn std::error::Error>> {
    let mut genes = NamedTempFile::new()?;
    writeln!(genes, "chr1\t+\t10\t20\t1\t10,\t20,\tA\tNM_1")?;
    genes.flush()?;

    feature_finder()
        .arg("-g")
        .arg(genes.path())
        .arg("-r")
        .arg(data_dir().join("regions.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("No header found"));

    Ok(())
}

#[test]
fn test_inclusive_overlap_reports_touching_pair() -> Result<(), Box<dyn std::error::Error>> {
    let mut genes = NamedTempFile::new()?;
    writeln!(
        genes,
        "#chrom\tstrand\ttxStart\ttxEnd\texonCount\texonStarts\texonEnds\tgeneSymbol\trefseq"
    )?;
    writeln!(genes, "chr1\t+\t100\t150\t1\t100,\t150,\tTOUCH,\tNM_9,")?;
    genes.flush()?;

    let mut regions = NamedTempFile::new()?;
    writeln!(regions, "#Chromosome\tStartPosition\tEndPosition\tRegionName")?;
    writeln!(regions, "chr1\t150\t200\tRegion_150_200")?;
    regions.flush()?;

    let header = "Region\tChromosome\tStart\tEnd\tGene\tRefSeq\tStrand\tGeneStart\tGeneEnd\tOverlap\n";

    feature_finder()
        .arg("-g")
        .arg(genes.path())
        .arg("-r")
        .arg(regions.path())
        .assert()
        .success()
        .stdout(predicate::str::diff(header));

    feature_finder()
        .arg("-g")
        .arg(genes.path())
        .arg("-r")
        .arg(regions.path())
        .args(["--overlap", "inclusive"])
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}Region_150_200\tchr1\t150\t200\tTOUCH\tNM_9\t+\t100\t150\t1\n",
            header
        )));

    Ok(())
}
