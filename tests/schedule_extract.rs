// tests/schedule_extract.rs
// Extraction behavior against synthetic pages built in the schedule page's
// markup shape.

use nicar_scrape::specs::schedule::{NICAR_2015, ScheduleSpec, extract_sessions};
use scraper::Html;

fn session_li(kind: &str, title: &str, grafs: &[&str], room: &str, time: &str) -> String {
    let mut s = String::from("<li>");
    s.push_str(&format!(r#"<div class="col-10">{kind}</div>"#));
    s.push_str(r#"<div class="col-60">"#);
    s.push_str(&format!(r#"<h3 class="title3">{title}</h3>"#));
    for g in grafs {
        s.push_str(&format!("<p>{g}</p>"));
    }
    s.push_str("</div>");
    s.push_str(&format!(
        r#"<div class="meta"><p>{room}</p><p>{time}</p></div>"#
    ));
    s.push_str("</li>");
    s
}

fn simple_session(title: &str) -> String {
    session_li("Panel", title, &["Body."], "Salon A", "9:00 a.m.")
}

fn page(days: &[Vec<String>]) -> Html {
    let mut html = String::from(r#"<html><body><div id="main">"#);
    for sessions in days {
        html.push_str(r#"<ul class="listview pane">"#);
        for s in sessions {
            html.push_str(s);
        }
        html.push_str("</ul>");
    }
    html.push_str("</div></body></html>");
    Html::parse_document(&html)
}

#[test]
fn five_day_page_gets_the_five_dates_in_order() {
    let days: Vec<Vec<String>> = (0..5).map(|i| vec![simple_session(&format!("Day {i}"))]).collect();
    let records = extract_sessions(&page(&days), &NICAR_2015).unwrap();

    assert_eq!(records.len(), 5);
    let dates: Vec<&str> = records.iter().map(|r| r.date.as_str()).collect();
    assert_eq!(
        dates,
        ["2015-03-04", "2015-03-05", "2015-03-06", "2015-03-07", "2015-03-08"]
    );
}

#[test]
fn extra_day_containers_are_silently_dropped() {
    let days: Vec<Vec<String>> = (0..7).map(|i| vec![simple_session(&format!("Day {i}"))]).collect();
    let records = extract_sessions(&page(&days), &NICAR_2015).unwrap();

    assert_eq!(records.len(), NICAR_2015.dates.len());
    assert_eq!(records.last().unwrap().date, "2015-03-08");
}

#[test]
fn fewer_day_containers_than_dates_is_fine() {
    let days: Vec<Vec<String>> = (0..2).map(|i| vec![simple_session(&format!("Day {i}"))]).collect();
    let records = extract_sessions(&page(&days), &NICAR_2015).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[1].date, "2015-03-05");
}

#[test]
fn empty_page_yields_no_records() {
    let doc = Html::parse_document("<html><body><p>Nothing here.</p></body></html>");
    assert!(extract_sessions(&doc, &NICAR_2015).unwrap().is_empty());
}

#[test]
fn sessions_keep_document_order_within_a_day() {
    let day = vec![
        simple_session("First"),
        simple_session("Second"),
        simple_session("Third"),
    ];
    let records = extract_sessions(&page(&[day]), &NICAR_2015).unwrap();

    let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, ["First", "Second", "Third"]);
}

#[test]
fn fields_come_from_their_configured_columns() {
    let day = vec![session_li(
        "Hands-on",
        "Scraping without tears",
        &["Speakers: Ada Lovelace", "Bring a laptop."],
        "Room 201",
        "4:15 p.m. - 5:15 p.m.",
    )];
    let records = extract_sessions(&page(&[day]), &NICAR_2015).unwrap();

    let r = &records[0];
    assert_eq!(r.kind, "Hands-on");
    assert_eq!(r.title, "Scraping without tears");
    assert_eq!(r.speakers.as_deref(), Some("Ada Lovelace"));
    assert_eq!(r.description, "Bring a laptop.");
    assert_eq!(r.room, "Room 201");
    assert_eq!(r.time, "4:15 p.m. - 5:15 p.m.");
    assert_eq!(r.date, "2015-03-04");
}

#[test]
fn description_blank_runs_collapse_to_one_blank_line() {
    let day = vec![session_li(
        "Panel",
        "Quiet middle",
        &["Top paragraph.", "", "", "Bottom paragraph."],
        "Salon B",
        "11:00 a.m.",
    )];
    let records = extract_sessions(&page(&[day]), &NICAR_2015).unwrap();

    assert_eq!(records[0].description, "Top paragraph.\n\nBottom paragraph.");
}

#[test]
fn missing_title_element_fails_the_run() {
    let broken = r#"<li>
        <div class="col-10">Panel</div>
        <div class="col-60"><p>Body.</p></div>
        <div class="meta"><p>Salon A</p><p>9:00 a.m.</p></div>
    </li>"#;
    let err = extract_sessions(&page(&[vec![broken.to_string()]]), &NICAR_2015).unwrap_err();
    assert!(err.to_string().contains(".title3"));
}

#[test]
fn wrong_meta_paragraph_count_fails_the_run() {
    let broken = r#"<li>
        <div class="col-10">Panel</div>
        <div class="col-60"><h3 class="title3">T</h3><p>Body.</p></div>
        <div class="meta"><p>Salon A</p></div>
    </li>"#;
    let err = extract_sessions(&page(&[vec![broken.to_string()]]), &NICAR_2015).unwrap_err();
    assert!(err.to_string().contains("found 1"));
}

#[test]
fn a_custom_spec_table_redirects_every_selector() {
    // Same pipeline, different markup vocabulary.
    let spec = ScheduleSpec {
        days: "ol.agenda",
        dates: &["2020-06-01"],
        session_type: ".tag",
        title: ".headline",
        description: ".blurb p",
        meta: ".where-when p",
    };
    let html = r#"<html><body>
        <ol class="agenda">
          <li>
            <span class="tag">Keynote</span>
            <h2 class="headline">Opening remarks</h2>
            <div class="blurb"><p>Welcome.</p></div>
            <div class="where-when"><p>Main stage</p><p>8:30 a.m.</p></div>
          </li>
        </ol>
    </body></html>"#;
    let records = extract_sessions(&Html::parse_document(html), &spec).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].kind, "Keynote");
    assert_eq!(records[0].title, "Opening remarks");
    assert_eq!(records[0].room, "Main stage");
    assert_eq!(records[0].date, "2020-06-01");
}
