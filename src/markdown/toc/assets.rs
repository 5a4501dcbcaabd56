//! Stylesheet and script that go with rendered tables of contents.
//!
//! Both are assembled from fixed blocks, one per feature, so a page only
//! carries what its `smooth_scroll`, `active_highlight` and `collapsible`
//! switches ask for. The stylesheet targets `.table-of-contents`; a custom
//! `class_name` gets the sticky positioning rule repeated for its first
//! class, while every other rule keys off the fixed `toc-*` classes.

use super::types::TocConfig;

const DEFAULT_CLASS_NAME: &str = "table-of-contents";

const BASE_STYLES: &str = r#"
.table-of-contents {
  position: sticky;
  top: 2rem;
}

.toc-title {
  margin: 0 0 1rem 0;
  font-size: 1.2rem;
  font-weight: 600;
}

.toc-list,
.toc-sublist {
  list-style: none;
  padding: 0;
  margin: 0;
}

.toc-sublist {
  padding-left: 1rem;
  margin-top: 0.5rem;
}

.toc-item,
.toc-subitem {
  margin-bottom: 0.5rem;
}

.toc-link {
  color: inherit;
  text-decoration: none;
  display: block;
  padding: 0.25rem 0;
  border-radius: 0.25rem;
  transition: background-color 0.2s;
}

.toc-link:hover {
  background-color: rgba(0, 0, 0, 0.05);
}

.toc-active .toc-link,
.active-toc-item .toc-link {
  background-color: rgba(0, 123, 255, 0.1);
  font-weight: 500;
}

.toc-truncate .toc-link {
  white-space: nowrap;
  overflow: hidden;
  text-overflow: ellipsis;
}

.toc-code code {
  font-size: 0.9em;
}

.toc-collapse .toc-link::before {
  content: '▶';
  margin-right: 0.5rem;
  transition: transform 0.2s;
}

.toc-collapse.collapsed .toc-link::before {
  transform: rotate(90deg);
}

.toc-expand > .toc-link::before {
  content: '▼';
  margin-right: 0.5rem;
}

.toc-expand.collapsed > .toc-link::before {
  content: '▶';
}

.toc-expand.collapsed > .toc-sublist {
  display: none;
}

.heading-anchor {
  color: inherit;
  text-decoration: none;
  opacity: 0;
  margin-left: -1rem;
  padding-right: 0.5rem;
  transition: opacity 0.2s;
}

h1:hover .heading-anchor,
h2:hover .heading-anchor,
h3:hover .heading-anchor,
h4:hover .heading-anchor,
h5:hover .heading-anchor,
h6:hover .heading-anchor {
  opacity: 0.7;
}

.heading-anchor:hover {
  opacity: 1;
}

@media (max-width: 768px) {
  .toc-sidebar {
    display: none;
  }

  .toc-floating {
    position: fixed;
    bottom: 1rem;
    right: 1rem;
    background: white;
    border: 1px solid #ddd;
    border-radius: 0.5rem;
    padding: 1rem;
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
    max-width: 250px;
  }
}
"#;

const SMOOTH_SCROLL_STYLES: &str = r#"
html {
  scroll-behavior: smooth;
}
"#;

const SCRIPT_PRELUDE: &str = r#"
function initToc() {
  const tocLinks = document.querySelectorAll('.toc-link')
"#;

const SMOOTH_SCROLL_SCRIPT: &str = r#"
  // Smooth scrolling for TOC links
  tocLinks.forEach(link => {
    link.addEventListener('click', function (e) {
      e.preventDefault()
      const targetId = this.getAttribute('href')?.substring(1)
      const targetElement = document.getElementById(targetId)

      if (targetElement) {
        targetElement.scrollIntoView({ behavior: 'smooth', block: 'start' })
        history.pushState(null, '', '#' + targetId)
      }
    })
  })
"#;

const ACTIVE_HIGHLIGHT_SCRIPT: &str = r#"
  // Highlight the heading nearest the top of the viewport
  function updateActiveTocItem() {
    const headings = document.querySelectorAll('h1, h2, h3, h4, h5, h6')

    let currentActive = null
    let currentDistance = Infinity

    headings.forEach(heading => {
      const rect = heading.getBoundingClientRect()
      const distance = Math.abs(rect.top)

      if (distance < currentDistance && rect.top <= 100) {
        currentActive = heading.id
        currentDistance = distance
      }
    })

    tocLinks.forEach(link => {
      const parent = link.parentElement
      if (parent) {
        parent.classList.remove('toc-active', 'active-toc-item')
        const href = link.getAttribute('href')?.substring(1)
        if (href === currentActive) {
          parent.classList.add('toc-active', 'active-toc-item')
        }
      }
    })
  }

  let scrollTimeout
  function throttledUpdate() {
    if (!scrollTimeout) {
      scrollTimeout = setTimeout(() => {
        updateActiveTocItem()
        scrollTimeout = null
      }, 100)
    }
  }

  window.addEventListener('scroll', throttledUpdate)
  updateActiveTocItem()
"#;

const COLLAPSE_SCRIPT: &str = r#"
  // Collapse and expand nested sections
  document.querySelectorAll('.toc-expand').forEach(item => {
    item.addEventListener('click', function (e) {
      if (e.target === this || e.target.closest('.toc-link')) {
        this.classList.toggle('collapsed')
      }
    })
  })
"#;

const HASH_SCROLL_SCRIPT: &str = r#"
  // Scroll to the hash target on first load
  if (window.location.hash) {
    const targetElement = document.getElementById(window.location.hash.substring(1))

    if (targetElement) {
      setTimeout(() => {
        targetElement.scrollIntoView({ behavior: 'smooth', block: 'start' })
      }, 100)
    }
  }
"#;

const SCRIPT_EPILOGUE: &str = r#"}

if (document.readyState === 'loading') {
  document.addEventListener('DOMContentLoaded', initToc)
} else {
  initToc()
}
"#;

/// CSS for every TOC feature: layout, active item, collapse markers,
/// heading anchors and smooth scrolling
pub fn generate_toc_styles() -> String {
    format!("{}{}", BASE_STYLES, SMOOTH_SCROLL_STYLES)
}

/// JavaScript for every TOC feature: smooth scrolling, active item
/// tracking, collapsing and initial hash scrolling
pub fn generate_toc_scripts() -> String {
    assemble_script(true, true, true)
}

/// CSS for the features `config` switches on
pub fn toc_styles_for(config: &TocConfig) -> String {
    let mut css = String::from(BASE_STYLES);

    if let Some(class) = custom_root_class(&config.class_name) {
        css.push_str(&format!("\n.{} {{\n  position: sticky;\n  top: 2rem;\n}}\n", class));
    }
    if config.smooth_scroll {
        css.push_str(SMOOTH_SCROLL_STYLES);
    }

    css
}

/// JavaScript for the features `config` switches on, or `None` when all of
/// them are off
pub fn toc_scripts_for(config: &TocConfig) -> Option<String> {
    if !config.wants_scripts() {
        return None;
    }

    Some(assemble_script(
        config.smooth_scroll,
        config.active_highlight,
        config.collapsible,
    ))
}

fn assemble_script(smooth_scroll: bool, active_highlight: bool, collapsible: bool) -> String {
    let mut js = String::from(SCRIPT_PRELUDE);

    if smooth_scroll {
        js.push_str(SMOOTH_SCROLL_SCRIPT);
    }
    if active_highlight {
        js.push_str(ACTIVE_HIGHLIGHT_SCRIPT);
    }
    if collapsible {
        js.push_str(COLLAPSE_SCRIPT);
    }
    // Without smooth scrolling the browser's own jump to the hash is enough
    if smooth_scroll {
        js.push_str(HASH_SCROLL_SCRIPT);
    }

    js.push_str(SCRIPT_EPILOGUE);
    js
}

// First class of a non-default `class_name`, if it is a plain CSS identifier
fn custom_root_class(class_name: &str) -> Option<&str> {
    let first = class_name.split_whitespace().next()?;
    let plain = first
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if plain && first != DEFAULT_CLASS_NAME {
        Some(first)
    } else {
        None
    }
}
