//! PubMed XML parser using quick-xml
//!
//! Streaming parser for efetch `PubmedArticleSet` documents. Only the
//! fields the affiliation scan needs are kept.

use anyhow::{Context, Result};
use quick_xml::Reader;
use quick_xml::events::Event;

/// One `<PubmedArticle>` as fetched, before any filtering.
///
/// Fields are optional because real records are frequently incomplete;
/// deciding what is required happens in [`crate::record`].
#[derive(Debug, Default, Clone)]
pub struct PubmedArticle {
    pub pmid: Option<String>,
    pub title: Option<String>,
    /// `<PubDate><Year>`
    pub pub_year: Option<String>,
    /// `<PubDate><MedlineDate>`, free text such as "1998 Dec-1999 Jan"
    pub medline_date: Option<String>,
    /// `None` when the record has no `<AuthorList>` at all
    pub authors: Option<Vec<Author>>,
}

#[derive(Debug, Default, Clone)]
pub struct Author {
    pub last_name: Option<String>,
    pub fore_name: Option<String>,
    pub collective_name: Option<String>,
    pub affiliations: Vec<String>,
    /// Set when a name field held text that could not be decoded
    pub name_error: Option<String>,
}

impl Author {
    /// Organizational author (`<CollectiveName>`).
    pub fn is_collective(&self) -> bool {
        self.collective_name.is_some()
    }
}

/// Parse all `<PubmedArticle>` elements from an efetch XML response.
///
/// A malformed article is logged and skipped; a malformed document is an error.
pub fn parse_pubmed_xml(xml: &str) -> Result<Vec<PubmedArticle>> {
    // Text is kept untrimmed so mixed content like `CO<sub>2</sub>-induced`
    // keeps its spacing; each reader trims the assembled string instead.
    let mut reader = Reader::from_str(xml);

    let mut articles = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) if e.name().as_ref() == b"PubmedArticle" => {
                match parse_article(&mut reader) {
                    Ok(article) => articles.push(article),
                    Err(e) => log::debug!("Failed to parse article: {e:#}"),
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(e).context("XML parse error"),
            _ => {}
        }
        buf.clear();
    }

    Ok(articles)
}

fn parse_article(reader: &mut Reader<&[u8]>) -> Result<PubmedArticle> {
    let mut article = PubmedArticle::default();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) if e.name().as_ref() == b"MedlineCitation" => {
                parse_medline_citation(reader, &mut article)?
            }
            Event::End(e) if e.name().as_ref() == b"PubmedArticle" => break,
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(article)
}

fn parse_medline_citation(reader: &mut Reader<&[u8]>, article: &mut PubmedArticle) -> Result<()> {
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => match e.name().as_ref() {
                // CommentsCorrections also carry <PMID>; the citation's own comes first
                b"PMID" => {
                    let pmid = read_text(reader)?;
                    if article.pmid.is_none() && !pmid.is_empty() {
                        article.pmid = Some(pmid);
                    }
                }
                b"Article" => parse_article_element(reader, article)?,
                b"CommentsCorrectionsList" => skip_element(reader, b"CommentsCorrectionsList")?,
                _ => {}
            },
            Event::End(e) if e.name().as_ref() == b"MedlineCitation" => break,
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

fn parse_article_element(reader: &mut Reader<&[u8]>, article: &mut PubmedArticle) -> Result<()> {
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => match e.name().as_ref() {
                b"Journal" => parse_journal(reader, article)?,
                b"ArticleTitle" => {
                    article.title = Some(read_text_content(reader, b"ArticleTitle")?)
                }
                b"AuthorList" => article.authors = Some(parse_author_list(reader)?),
                _ => {}
            },
            // <AuthorList/> still counts as a present, empty list
            Event::Empty(e) if e.name().as_ref() == b"AuthorList" => {
                article.authors = Some(Vec::new())
            }
            Event::End(e) if e.name().as_ref() == b"Article" => break,
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

fn parse_journal(reader: &mut Reader<&[u8]>, article: &mut PubmedArticle) -> Result<()> {
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) if e.name().as_ref() == b"PubDate" => parse_pub_date(reader, article)?,
            Event::End(e) if e.name().as_ref() == b"Journal" => break,
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

fn parse_pub_date(reader: &mut Reader<&[u8]>, article: &mut PubmedArticle) -> Result<()> {
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => match e.name().as_ref() {
                b"Year" => article.pub_year = non_empty(read_text(reader)?),
                b"MedlineDate" => article.medline_date = non_empty(read_text(reader)?),
                _ => {}
            },
            Event::End(e) if e.name().as_ref() == b"PubDate" => break,
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

fn parse_author_list(reader: &mut Reader<&[u8]>) -> Result<Vec<Author>> {
    let mut authors = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) if e.name().as_ref() == b"Author" => {
                authors.push(parse_author(reader)?);
            }
            Event::End(e) if e.name().as_ref() == b"AuthorList" => break,
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(authors)
}

fn parse_author(reader: &mut Reader<&[u8]>) -> Result<Author> {
    let mut author = Author::default();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => match e.name().as_ref() {
                b"LastName" => author.last_name = Some(read_name(reader, &mut author)?),
                b"ForeName" => author.fore_name = Some(read_name(reader, &mut author)?),
                b"CollectiveName" => {
                    author.collective_name = Some(read_text_content(reader, b"CollectiveName")?)
                }
                b"AffiliationInfo" => {
                    if let Some(aff) = parse_affiliation(reader)? {
                        author.affiliations.push(aff);
                    }
                }
                _ => {}
            },
            Event::End(e) if e.name().as_ref() == b"Author" => break,
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(author)
}

fn parse_affiliation(reader: &mut Reader<&[u8]>) -> Result<Option<String>> {
    let mut buf = Vec::new();
    let mut affiliation = None;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) if e.name().as_ref() == b"Affiliation" => {
                affiliation = Some(read_text_content(reader, b"Affiliation")?);
            }
            Event::End(e) if e.name().as_ref() == b"AffiliationInfo" => break,
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(affiliation)
}

fn skip_element(reader: &mut Reader<&[u8]>, end_tag: &[u8]) -> Result<()> {
    let mut buf = Vec::new();
    let mut depth = 1;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(_) => depth += 1,
            Event::End(e) => {
                depth -= 1;
                if depth == 0 && e.name().as_ref() == end_tag {
                    break;
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

/// Read text content until the current element closes, flattening nested markup
fn read_text(reader: &mut Reader<&[u8]>) -> Result<String> {
    let mut buf = Vec::new();
    let mut text = String::new();
    let mut depth = 1;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Text(e) => text.push_str(&e.unescape()?),
            Event::Start(_) => depth += 1,
            Event::End(_) => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(text.trim().to_string())
}

/// Read a name element. Undecodable text is recorded on the author and
/// kept raw instead of failing the whole article.
fn read_name(reader: &mut Reader<&[u8]>, author: &mut Author) -> Result<String> {
    let mut buf = Vec::new();
    let mut text = String::new();
    let mut depth = 1;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Text(e) => match e.unescape() {
                Ok(s) => text.push_str(&s),
                Err(err) => {
                    author.name_error = Some(err.to_string());
                    text.push_str(&String::from_utf8_lossy(&e));
                }
            },
            Event::Start(_) => depth += 1,
            Event::End(_) => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(text.trim().to_string())
}

/// Read text content of a specific element, flattening nested tags
fn read_text_content(reader: &mut Reader<&[u8]>, end_tag: &[u8]) -> Result<String> {
    let mut buf = Vec::new();
    let mut text = String::new();
    let mut depth = 1;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Text(e) => text.push_str(&e.unescape()?),
            Event::Start(_) => depth += 1,
            Event::End(e) => {
                depth -= 1;
                if depth == 0 && e.name().as_ref() == end_tag {
                    break;
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(text.trim().to_string())
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}
