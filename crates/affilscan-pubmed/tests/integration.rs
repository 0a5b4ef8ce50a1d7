//! Integration tests for affilscan-pubmed
//!
//! Tests touching NCBI are marked #[ignore].
//! Run with: cargo test -p affilscan-pubmed --test integration -- --ignored

use std::sync::Arc;

use affilscan_pubmed::{
    COLUMNS, Config, EutilsClient, parse_pubmed_xml, process_records, save_to_csv,
};
use tempfile::TempDir;

const EFETCH_XML: &str = r#"<?xml version="1.0" ?>
<!DOCTYPE PubmedArticleSet PUBLIC "-//NLM//DTD PubMedArticle, 1st January 2024//EN" "https://dtd.nlm.nih.gov/ncbi/pubmed/out/pubmed_240101.dtd">
<PubmedArticleSet>
  <PubmedArticle>
    <MedlineCitation Status="PubMed-not-MEDLINE" Owner="NLM">
      <PMID Version="1">123</PMID>
      <Article PubModel="Print">
        <Journal>
          <JournalIssue CitedMedium="Print">
            <PubDate><Year>2021</Year></PubDate>
          </JournalIssue>
        </Journal>
        <ArticleTitle>Study X</ArticleTitle>
        <AuthorList CompleteYN="Y">
          <Author ValidYN="Y">
            <LastName>Doe</LastName>
            <ForeName>Jane</ForeName>
            <AffiliationInfo>
              <Affiliation>Acme Biotech, jane@acme.com</Affiliation>
            </AffiliationInfo>
          </Author>
          <Author ValidYN="Y">
            <LastName>Lee</LastName>
            <ForeName>Ann</ForeName>
            <AffiliationInfo>
              <Affiliation>Dept. of Medicine, Harvard University Hospital</Affiliation>
            </AffiliationInfo>
          </Author>
          <Author ValidYN="Y">
            <CollectiveName>Acme Biotech Study Group</CollectiveName>
          </Author>
        </AuthorList>
      </Article>
    </MedlineCitation>
  </PubmedArticle>
  <PubmedArticle>
    <MedlineCitation>
      <PMID Version="1">456</PMID>
      <Article>
        <Journal>
          <JournalIssue><PubDate><MedlineDate>2019 Winter</MedlineDate></PubDate></JournalIssue>
        </Journal>
        <ArticleTitle>Academic only</ArticleTitle>
        <AuthorList>
          <Author>
            <LastName>Sato</LastName>
            <ForeName>Ken</ForeName>
            <AffiliationInfo><Affiliation>Kyoto University</Affiliation></AffiliationInfo>
          </Author>
        </AuthorList>
      </Article>
    </MedlineCitation>
  </PubmedArticle>
  <PubmedArticle>
    <MedlineCitation>
      <PMID Version="1">789</PMID>
      <Article>
        <AuthorList>
          <Author>
            <LastName>Roe</LastName>
            <AffiliationInfo><Affiliation>Roe Pharma Ltd</Affiliation></AffiliationInfo>
          </Author>
        </AuthorList>
      </Article>
    </MedlineCitation>
  </PubmedArticle>
</PubmedArticleSet>"#;

#[test]
fn efetch_document_to_csv() {
    let articles = parse_pubmed_xml(EFETCH_XML).expect("sample parses");
    assert_eq!(articles.len(), 3);

    // 456 has no company author, 789 has no title
    let records = process_records(&articles);
    assert_eq!(records.len(), 1);

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("papers.csv");
    save_to_csv(&records, &path).expect("CSV written");

    let text = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], COLUMNS.join(","));
    assert_eq!(lines[1], "123,Study X,2021,Jane Doe,Acme Biotech,jane@acme.com");
}

#[test]
fn empty_result_writes_header_only() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("empty.csv");
    std::fs::write(&path, "stale contents\nfrom an earlier run\n").unwrap();

    save_to_csv(&[], &path).expect("CSV written");

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text, format!("{}\n", COLUMNS.join(",")));
}

#[test]
fn save_into_missing_directory_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("no/such/dir/out.csv");
    assert!(save_to_csv(&[], &path).is_err());
}

/// Live search against NCBI
#[test]
#[ignore]
fn live_search_respects_max_results() {
    let config = Config::default();
    let client = EutilsClient::new(&config);
    let ids = client.search("cancer", 1);
    assert!(ids.len() <= 1);
}

/// Live end-to-end run against NCBI
#[test]
#[ignore]
fn live_run_produces_rows() {
    let config = Config {
        max_results: 20,
        ..Default::default()
    };
    let progress = Arc::new(affilscan_core::ProgressContext::with_tty(false));

    let output = affilscan_pubmed::run(
        "pharmaceutical industry clinical trial",
        &config,
        &progress,
    );
    assert!(output.summary.ids_found > 0, "search returned nothing");
    assert!(output.summary.articles_fetched > 0, "fetch returned nothing");
    for record in &output.records {
        assert!(!record.authors.is_empty());
    }
}
