//! Single-file HTML timeline page.
//!
//! The figure is embedded as JSON inside a `<script type="application/json">`
//! tag and drawn by an inline script that builds the SVG through DOM APIs
//! (createElementNS, setAttribute, textContent). No network access is needed
//! to view the page.

use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::{TimelineError, TimelineResult};

use super::schema::Figure;

/// HTML-escape a string for safe insertion into HTML content.
///
/// Escapes: & < > " '
pub fn html_escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape serialized JSON for embedding inside a `<script>` tag.
///
/// `<` becomes `\u003c`, so `</script>` in event text cannot close the tag.
/// The result is still valid JSON.
fn escape_json_for_html_script(json: &str) -> String {
    json.replace('<', "\\u003c")
}

const STYLE: &str = r#"<style>
* { box-sizing: border-box; margin: 0; padding: 0; }
body {
  font-family: "Open Sans", verdana, arial, sans-serif;
  background: #fff;
  color: #444;
}
#chart { position: relative; width: 100%; }
#chart-svg { display: block; }
#chart-svg .title { font-size: 17px; fill: #444; }
#chart-svg .tick { font-size: 12px; fill: #444; }
#chart-svg .axis-title { font-size: 14px; fill: #444; }
#chart-svg .grid { stroke: #eee; stroke-width: 1; }
#chart-svg .label { font-size: 12px; fill: #444; pointer-events: none; }
#chart-svg .marker { cursor: pointer; }
#tooltip {
  position: fixed;
  display: none;
  max-width: 420px;
  padding: 6px 8px;
  background: #fff;
  border: 1px solid #1f3fbf;
  border-radius: 3px;
  font-size: 13px;
  line-height: 1.35;
  pointer-events: none;
  box-shadow: 0 1px 4px rgba(0, 0, 0, 0.2);
}
</style>
"#;

const SCRIPT: &str = r#"<script>
(function () {
  'use strict';

  const fig = JSON.parse(document.getElementById('figure-data').textContent);
  const layout = fig.layout;
  const ns = 'http://www.w3.org/2000/svg';
  const DAY_MS = 86400000;
  const LINE_HEIGHT = 15;
  const LABEL_GAP = 4;
  const MAX_TICKS = 8;
  const X_AXIS_SPACE = 44;
  const TICK_STEPS = [
    { days: 1 }, { days: 2 }, { days: 7 }, { days: 14 },
    { months: 1 }, { months: 3 }, { months: 6 },
    { years: 1 }, { years: 2 }, { years: 5 }, { years: 10 },
    { years: 20 }, { years: 50 }, { years: 100 }
  ];

  const container = document.getElementById('chart');
  const svg = document.getElementById('chart-svg');
  const tooltip = document.getElementById('tooltip');

  // Date.UTC maps years 0-99 to 1900-1999; setUTCFullYear does not.
  function utc(year, month, day) {
    const d = new Date(0);
    d.setUTCFullYear(year, month, day);
    return d.getTime();
  }

  function parseDate(s) {
    return utc(Number(s.slice(0, 4)), Number(s.slice(5, 7)) - 1, Number(s.slice(8, 10)));
  }

  function pad(n, width) {
    let s = String(n);
    while (s.length < width) s = '0' + s;
    return s;
  }

  function formatTick(ms) {
    const d = new Date(ms);
    return layout.x_axis.tick_format
      .replace('%Y', pad(d.getUTCFullYear(), 4))
      .replace('%m', pad(d.getUTCMonth() + 1, 2))
      .replace('%d', pad(d.getUTCDate(), 2));
  }

  function stepMs(step) {
    if (step.days) return step.days * DAY_MS;
    if (step.months) return step.months * 30.44 * DAY_MS;
    return step.years * 365.25 * DAY_MS;
  }

  function tickValues(lo, hi) {
    let step = TICK_STEPS[TICK_STEPS.length - 1];
    for (const s of TICK_STEPS) {
      if ((hi - lo) / stepMs(s) <= MAX_TICKS) { step = s; break; }
    }
    const ticks = [];
    if (step.days) {
      const ms = stepMs(step);
      for (let t = Math.ceil(lo / ms) * ms; t <= hi; t += ms) ticks.push(t);
      return ticks;
    }
    const start = new Date(lo);
    const n = step.months ? step.months : step.years * 12;
    let idx = Math.ceil((start.getUTCFullYear() * 12 + start.getUTCMonth()) / n) * n;
    for (;; idx += n) {
      const t = utc(Math.floor(idx / 12), idx % 12, 1);
      if (t > hi) break;
      if (t >= lo) ticks.push(t);
    }
    return ticks;
  }

  function svgEl(name, attrs) {
    const el = document.createElementNS(ns, name);
    for (const key in attrs) el.setAttribute(key, attrs[key]);
    return el;
  }

  // Markup is limited to <br> and <b>; everything else is inserted as text.
  function appendMarkup(parent, markup) {
    const parts = markup.split(/(<br>|<b>|<\/b>)/);
    let bold = false;
    for (const part of parts) {
      if (part === '<br>') { parent.appendChild(document.createElement('br')); continue; }
      if (part === '<b>') { bold = true; continue; }
      if (part === '</b>') { bold = false; continue; }
      if (part === '') continue;
      const el = document.createElement(bold ? 'b' : 'span');
      el.textContent = part;
      parent.appendChild(el);
    }
  }

  function showTooltip(marker, evt) {
    while (tooltip.firstChild) tooltip.removeChild(tooltip.firstChild);
    tooltip.style.borderColor = marker.color;
    appendMarkup(tooltip, marker.hover_text);
    tooltip.style.display = 'block';
    moveTooltip(evt);
  }

  function moveTooltip(evt) {
    const x = Math.min(evt.clientX + 12, window.innerWidth - tooltip.offsetWidth - 4);
    tooltip.style.left = Math.max(x, 4) + 'px';
    tooltip.style.top = (evt.clientY + 12) + 'px';
  }

  function hideTooltip() {
    tooltip.style.display = 'none';
  }

  function drawLabel(marker, cx, cy, radius) {
    const lines = marker.label.split('<br>').filter(function (l) { return l !== ''; });
    if (lines.length === 0) return;
    const text = svgEl('text', { 'class': 'label', 'text-anchor': 'middle' });
    let y;
    if (marker.text_position === 'top center') {
      y = cy - radius - LABEL_GAP - (lines.length - 1) * LINE_HEIGHT;
    } else {
      y = cy + radius + LABEL_GAP + LINE_HEIGHT * 0.8;
    }
    lines.forEach(function (line, i) {
      const tspan = svgEl('tspan', { x: cx, y: y + i * LINE_HEIGHT });
      tspan.textContent = line;
      text.appendChild(tspan);
    });
    svg.appendChild(text);
  }

  function draw() {
    while (svg.firstChild) svg.removeChild(svg.firstChild);
    if (fig.markers.length === 0) return;

    const width = Math.max(container.clientWidth, 320);
    const height = layout.height;
    const m = layout.margin;
    svg.setAttribute('width', width);
    svg.setAttribute('height', height);
    svg.setAttribute('viewBox', '0 0 ' + width + ' ' + height);

    let xMin = parseDate(fig.axis_line.x0);
    let xMax = parseDate(fig.axis_line.x1);
    if (xMin === xMax) { xMin -= DAY_MS; xMax += DAY_MS; }
    const pad5 = (xMax - xMin) * 0.05;
    xMin -= pad5;
    xMax += pad5;

    const top = m.t;
    const bottom = height - m.b - X_AXIS_SPACE;
    const plotW = width - m.l - m.r;
    const yLo = layout.y_axis.range[0];
    const yHi = layout.y_axis.range[1];
    const xScale = function (v) { return m.l + (v - xMin) / (xMax - xMin) * plotW; };
    const yScale = function (v) { return top + (yHi - v) / (yHi - yLo) * (bottom - top); };

    const title = svgEl('text', { 'class': 'title', x: m.l, y: Math.max(top * 0.6, 17) });
    title.textContent = layout.title;
    svg.appendChild(title);

    for (const t of tickValues(xMin, xMax)) {
      const x = xScale(t);
      if (layout.x_axis.show_grid) {
        svg.appendChild(svgEl('line', { 'class': 'grid', x1: x, y1: top, x2: x, y2: bottom }));
      }
      const tick = svgEl('text', { 'class': 'tick', x: x, y: bottom + 16, 'text-anchor': 'middle' });
      tick.textContent = formatTick(t);
      svg.appendChild(tick);
    }

    const axisTitle = svgEl('text', {
      'class': 'axis-title', x: m.l + plotW / 2, y: bottom + 38, 'text-anchor': 'middle'
    });
    axisTitle.textContent = layout.x_axis.title;
    svg.appendChild(axisTitle);

    const axisY = yScale(fig.axis_line.y);
    svg.appendChild(svgEl('line', {
      x1: xScale(parseDate(fig.axis_line.x0)), y1: axisY,
      x2: xScale(parseDate(fig.axis_line.x1)), y2: axisY,
      stroke: fig.axis_line.color, 'stroke-width': fig.axis_line.width
    }));

    for (const marker of fig.markers) {
      const cx = xScale(parseDate(marker.x));
      const cy = yScale(marker.y);
      const radius = marker.size / 2;
      const circle = svgEl('circle', { 'class': 'marker', cx: cx, cy: cy, r: radius, fill: marker.color });
      circle.addEventListener('mouseenter', function (evt) { showTooltip(marker, evt); });
      circle.addEventListener('mousemove', moveTooltip);
      circle.addEventListener('mouseleave', hideTooltip);
      svg.appendChild(circle);
      drawLabel(marker, cx, cy, radius);
    }
  }

  draw();
  window.addEventListener('resize', draw);
})();
</script>
"#;

/// Render a figure as a standalone HTML document.
///
/// Same figure in, same bytes out.
pub fn render_timeline_html(figure: &Figure) -> String {
    let figure_json = serde_json::to_string(figure).unwrap_or_else(|_| "{}".to_string());
    let escaped_json = escape_json_for_html_script(&figure_json);
    let title = html_escape(&figure.layout.title);

    let mut html = String::with_capacity(16 * 1024 + escaped_json.len());
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n");
    html.push_str(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    html.push_str(&format!("<title>{title}</title>\n"));
    html.push_str(STYLE);
    html.push_str("</head>\n<body>\n");
    html.push_str(&format!(
        "<div id=\"chart\" style=\"height: {}px\">\n<svg id=\"chart-svg\" xmlns=\"http://www.w3.org/2000/svg\" role=\"img\" aria-label=\"{title}\"></svg>\n</div>\n",
        figure.layout.height
    ));
    html.push_str("<div id=\"tooltip\"></div>\n");
    html.push_str("<script type=\"application/json\" id=\"figure-data\">\n");
    html.push_str(&escaped_json);
    html.push_str("\n</script>\n");
    html.push_str(SCRIPT);
    html.push_str("</body>\n</html>\n");
    html
}

/// Write the timeline page to `path`.
///
/// The parent directory is created if needed. Content goes to a temp file in
/// the same directory first and is then renamed over `path`, so a failed run
/// leaves no partial file behind.
pub fn write_timeline_html(figure: &Figure, path: &Path) -> TimelineResult<()> {
    let html = render_timeline_html(figure);

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(|e| TimelineError::io(dir, e))?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| TimelineError::io(dir, e))?;
    tmp.write_all(html.as_bytes()).map_err(|e| TimelineError::io(tmp.path(), e))?;
    // temp files are created owner-only; the page should be world-readable
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))
            .map_err(|e| TimelineError::io(tmp.path(), e))?;
    }
    tmp.persist(path).map_err(|e| TimelineError::io(path, e.error))?;

    debug!(bytes = html.len(), path = %path.display(), "wrote timeline html");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TimelineConfig;
    use crate::core::schema::Event;
    use crate::timeline::build_figure;
    use time::macros::date;

    fn sample_figure() -> Figure {
        let events = vec![
            Event {
                date: date!(2012 - 09 - 30),
                event_name: "AlexNet wins ImageNet".to_string(),
                authors: vec!["Krizhevsky".to_string(), "Sutskever".to_string()],
                summary: "Deep CNNs take the lead.".to_string(),
            },
            Event {
                date: date!(2017 - 06 - 12),
                event_name: "Attention Is All You Need".to_string(),
                authors: vec!["Vaswani".to_string()],
                summary: "The Transformer.".to_string(),
            },
        ];
        build_figure(&events, &TimelineConfig::default()).unwrap()
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape("<a href=\"x\">Tom & Jerry's</a>"),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#x27;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_json_keeps_json_valid() {
        let json = serde_json::to_string("</script><!--").unwrap();
        let escaped = escape_json_for_html_script(&json);
        assert!(!escaped.contains('<'));
        let back: String = serde_json::from_str(&escaped).unwrap();
        assert_eq!(back, "</script><!--");
    }

    #[test]
    fn test_render_embeds_figure() {
        let html = render_timeline_html(&sample_figure());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Interactive AI History Timeline</title>"));
        assert!(html.contains("id=\"figure-data\""));
        assert!(html.contains("\"x\":\"2012-09-30\""));
        assert!(html.contains("\"text_position\":\"bottom center\""));
        // markup tags inside JSON are escaped
        assert!(html.contains("\\u003cb>Date:\\u003c/b> 2012-09-30"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let fig = sample_figure();
        assert_eq!(render_timeline_html(&fig), render_timeline_html(&fig));
    }

    #[test]
    fn test_write_creates_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("timelines").join("timeline.html");
        write_timeline_html(&sample_figure(), &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, render_timeline_html(&sample_figure()));

        // no temp files left next to the output
        let entries = std::fs::read_dir(path.parent().unwrap()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_written_file_is_world_readable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("timeline.html");
        write_timeline_html(&sample_figure(), &path).unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
    }

    #[test]
    fn test_script_avoids_two_digit_year_mapping() {
        let html = render_timeline_html(&sample_figure());
        assert!(!html.contains("Date.UTC("));
        assert!(html.contains("d.setUTCFullYear(year, month, day)"));
    }

    #[test]
    fn test_write_overwrites_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("timeline.html");
        std::fs::write(&path, "stale").unwrap();
        write_timeline_html(&sample_figure(), &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("figure-data"));
    }
}
