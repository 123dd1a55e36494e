use startlabx_api_common::ai::Slide;

pub mod legal_doc;
pub mod list_generations;
pub mod market_analysis;
pub mod pitch_deck;

/// Splits provider output into titled slides. Slide titles are markdown
/// headings; anything before the first heading becomes an untitled intro
/// slide.
pub(crate) fn parse_slides(output: &str) -> Vec<Slide> {
  let mut slides: Vec<Slide> = Vec::new();
  let mut current: Option<Slide> = None;
  for line in output.lines() {
    if let Some(title) = line.strip_prefix('#') {
      if let Some(slide) = current.take() {
        slides.push(slide);
      }
      current = Some(Slide {
        title: title.trim_start_matches('#').trim().to_string(),
        body: String::new(),
      });
    } else {
      let slide = current.get_or_insert_with(|| Slide {
        title: "Introduction".to_string(),
        body: String::new(),
      });
      if !slide.body.is_empty() {
        slide.body.push('\n');
      }
      slide.body.push_str(line);
    }
  }
  if let Some(slide) = current {
    slides.push(slide);
  }
  slides
    .into_iter()
    .map(|mut s| {
      s.body = s.body.trim().to_string();
      s
    })
    .filter(|s| !s.title.is_empty() || !s.body.is_empty())
    .collect()
}

/// Pulls "Trends:" and "Competitors:" bullet sections out of the output;
/// everything before the first section is the summary.
pub(crate) fn parse_market_sections(output: &str) -> (String, Vec<String>, Vec<String>) {
  let mut summary = String::new();
  let mut trends = Vec::new();
  let mut competitors = Vec::new();
  let mut section = 0; // 0 summary, 1 trends, 2 competitors
  for line in output.lines() {
    let lower = line.trim().to_lowercase();
    if lower.starts_with("trends") && lower.trim_end_matches(':').trim() == "trends" {
      section = 1;
      continue;
    }
    if lower.starts_with("competitors") && lower.trim_end_matches(':').trim() == "competitors" {
      section = 2;
      continue;
    }
    let bullet = line
      .trim()
      .trim_start_matches(['-', '*'])
      .trim()
      .to_string();
    match section {
      1 if !bullet.is_empty() => trends.push(bullet),
      2 if !bullet.is_empty() => competitors.push(bullet),
      0 => {
        if !summary.is_empty() {
          summary.push('\n');
        }
        summary.push_str(line);
      }
      _ => {}
    }
  }
  (summary.trim().to_string(), trends, competitors)
}

#[cfg(test)]
mod tests {
  use super::{parse_market_sections, parse_slides};
  use pretty_assertions::assert_eq;

  #[test]
  fn test_parse_slides() {
    let output = "# Problem\nHiring is broken.\n\n# Solution\nWe fix it.";
    let slides = parse_slides(output);
    assert_eq!(2, slides.len());
    assert_eq!("Problem", slides[0].title);
    assert_eq!("Hiring is broken.", slides[0].body);
    assert_eq!("Solution", slides[1].title);
  }

  #[test]
  fn test_parse_slides_without_headings() {
    let slides = parse_slides("just a wall of text");
    assert_eq!(1, slides.len());
    assert_eq!("Introduction", slides[0].title);
    assert_eq!("just a wall of text", slides[0].body);
  }

  #[test]
  fn test_parse_slides_empty() {
    assert!(parse_slides("").is_empty());
  }

  #[test]
  fn test_parse_market_sections() {
    let output = "A growing market.\n\nTrends:\n- remote work\n- ai tooling\n\nCompetitors:\n- BigCo\n- SmallCo";
    let (summary, trends, competitors) = parse_market_sections(output);
    assert_eq!("A growing market.", summary);
    assert_eq!(vec!["remote work", "ai tooling"], trends);
    assert_eq!(vec!["BigCo", "SmallCo"], competitors);
  }

  #[test]
  fn test_parse_market_sections_summary_only() {
    let (summary, trends, competitors) = parse_market_sections("Nothing structured here.");
    assert_eq!("Nothing structured here.", summary);
    assert!(trends.is_empty());
    assert!(competitors.is_empty());
  }
}
