use affilscan_pubmed::{parse_pubmed_xml, process_records};

const AFFILIATIONS: [&str; 4] = [
    "Department of Oncology, University of Oslo, Norway.",
    "Acme Biotech Inc, Cambridge, MA, USA. jane.doe@acmebio.com",
    "Novo Nordisk, Corp Ltd, Bagsvaerd, Denmark.",
    "Institute of Pharmacology, Vienna General Hospital.",
];

/// Synthetic efetch document with `n` articles of four authors each.
fn sample_document(n: usize) -> String {
    let mut xml = String::from("<?xml version=\"1.0\"?>\n<PubmedArticleSet>\n");
    for i in 0..n {
        xml.push_str(&format!(
            "<PubmedArticle><MedlineCitation><PMID>{i}</PMID><Article>\
             <Journal><JournalIssue><PubDate><Year>2024</Year></PubDate></JournalIssue></Journal>\
             <ArticleTitle>Article {i}</ArticleTitle><AuthorList>"
        ));
        for (j, aff) in AFFILIATIONS.iter().enumerate() {
            xml.push_str(&format!(
                "<Author><LastName>Last{j}</LastName><ForeName>First{j}</ForeName>\
                 <AffiliationInfo><Affiliation>{aff}</Affiliation></AffiliationInfo></Author>"
            ));
        }
        xml.push_str("</AuthorList></Article></MedlineCitation></PubmedArticle>\n");
    }
    xml.push_str("</PubmedArticleSet>\n");
    xml
}

#[divan::bench]
fn parse_pubmed_xml_bench(bencher: divan::Bencher) {
    let doc = sample_document(500);
    bencher.bench(|| parse_pubmed_xml(&doc).unwrap());
}

#[divan::bench]
fn process_records_bench(bencher: divan::Bencher) {
    let articles = parse_pubmed_xml(&sample_document(500)).unwrap();
    bencher.bench(|| process_records(&articles));
}

fn main() {
    divan::main();
}
