//! 슬롯 기반 페이지 템플릿.
//!
//! 템플릿은 `{{slot_name}}` 표식이 들어간 HTML입니다. 렌더러는 이름으로
//! 슬롯을 채우고, 템플릿에 없는 슬롯을 채우려 하면 아무 일도 하지 않습니다.
//! 채워지지 않은 슬롯은 빈 문자열로 출력됩니다.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use tracing::debug;

use strata_core::{StrataError, StrataResult};

/// 파싱된 템플릿 조각.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    Slot(String),
}

/// 파싱된 페이지 템플릿.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTemplate {
    name: String,
    segments: Vec<Segment>,
}

impl PageTemplate {
    /// 템플릿 원문을 파싱합니다.
    ///
    /// 닫히지 않은 `{{`나 빈 슬롯 이름은 에러입니다.
    pub fn parse(name: impl Into<String>, source: &str) -> StrataResult<Self> {
        let name = name.into();
        let mut segments = Vec::new();
        let mut rest = source;

        while let Some(start) = rest.find("{{") {
            if start > 0 {
                segments.push(Segment::Text(rest[..start].to_string()));
            }
            let after = &rest[start + 2..];
            let end = after.find("}}").ok_or_else(|| {
                StrataError::Template(format!("{}: unclosed slot marker", name))
            })?;

            let slot = after[..end].trim();
            if slot.is_empty() || !slot.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return Err(StrataError::Template(format!(
                    "{}: invalid slot name '{}'",
                    name, slot
                )));
            }
            segments.push(Segment::Slot(slot.to_string()));
            rest = &after[end + 2..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Text(rest.to_string()));
        }

        Ok(Self { name, segments })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 템플릿에 있는 슬롯 이름들
    pub fn slots(&self) -> BTreeSet<&str> {
        self.segments
            .iter()
            .filter_map(|s| match s {
                Segment::Slot(name) => Some(name.as_str()),
                Segment::Text(_) => None,
            })
            .collect()
    }

    pub fn has_slot(&self, slot: &str) -> bool {
        self.segments
            .iter()
            .any(|s| matches!(s, Segment::Slot(name) if name == slot))
    }

    /// 채울 페이지를 시작합니다.
    pub fn page(&self) -> Page<'_> {
        Page {
            template: self,
            fills: HashMap::new(),
        }
    }
}

/// 슬롯을 채우는 중인 페이지.
#[derive(Debug)]
pub struct Page<'a> {
    template: &'a PageTemplate,
    fills: HashMap<String, String>,
}

impl Page<'_> {
    /// 슬롯에 HTML을 넣습니다. 같은 슬롯을 다시 채우면 대체됩니다.
    pub fn fill(&mut self, slot: &str, html: impl Into<String>) -> &mut Self {
        if self.template.has_slot(slot) {
            self.fills.insert(slot.to_string(), html.into());
        } else {
            debug!(template = %self.template.name, slot = slot, "Slot not in template, skipping");
        }
        self
    }

    /// 슬롯에 텍스트를 넣습니다 (HTML 이스케이프).
    pub fn fill_text(&mut self, slot: &str, text: &str) -> &mut Self {
        self.fill(slot, strata_analytics::escape_html(text))
    }

    pub fn is_filled(&self, slot: &str) -> bool {
        self.fills.contains_key(slot)
    }

    /// 최종 HTML을 생성합니다.
    pub fn render(&self) -> String {
        self.template
            .segments
            .iter()
            .map(|segment| match segment {
                Segment::Text(text) => text.as_str(),
                Segment::Slot(name) => self.fills.get(name).map(String::as_str).unwrap_or(""),
            })
            .collect()
    }
}

/// 내장 템플릿 원문
const INDEX_HTML: &str = include_str!("../templates/index.html");
const CRYPTO_HTML: &str = include_str!("../templates/crypto.html");
const DASHBOARD_HTML: &str = include_str!("../templates/dashboard.html");
const NAVBAR_HTML: &str = include_str!("../templates/components/navbar.html");
const FOOTER_HTML: &str = include_str!("../templates/components/footer.html");

/// 사이트의 모든 템플릿.
#[derive(Debug, Clone)]
pub struct TemplateSet {
    pub index: PageTemplate,
    pub crypto: PageTemplate,
    pub dashboard: PageTemplate,
    pub navbar: PageTemplate,
    pub footer: PageTemplate,
}

impl TemplateSet {
    /// 내장 템플릿.
    pub fn builtin() -> StrataResult<Self> {
        Ok(Self {
            index: PageTemplate::parse("index.html", INDEX_HTML)?,
            crypto: PageTemplate::parse("crypto.html", CRYPTO_HTML)?,
            dashboard: PageTemplate::parse("dashboard.html", DASHBOARD_HTML)?,
            navbar: PageTemplate::parse("components/navbar.html", NAVBAR_HTML)?,
            footer: PageTemplate::parse("components/footer.html", FOOTER_HTML)?,
        })
    }

    /// 디렉토리의 파일로 내장 템플릿을 대체합니다.
    ///
    /// 디렉토리에 없는 파일은 내장 템플릿을 그대로 씁니다.
    pub async fn load(dir: Option<&Path>) -> StrataResult<Self> {
        let Some(dir) = dir else {
            return Self::builtin();
        };

        Ok(Self {
            index: load_or_builtin(dir, "index.html", INDEX_HTML).await?,
            crypto: load_or_builtin(dir, "crypto.html", CRYPTO_HTML).await?,
            dashboard: load_or_builtin(dir, "dashboard.html", DASHBOARD_HTML).await?,
            navbar: load_or_builtin(dir, "components/navbar.html", NAVBAR_HTML).await?,
            footer: load_or_builtin(dir, "components/footer.html", FOOTER_HTML).await?,
        })
    }
}

async fn load_or_builtin(dir: &Path, name: &str, builtin: &str) -> StrataResult<PageTemplate> {
    let path = dir.join(name);
    match tokio::fs::read_to_string(&path).await {
        Ok(source) => {
            debug!(path = %path.display(), "Using template override");
            PageTemplate::parse(name, &source)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => PageTemplate::parse(name, builtin),
        Err(e) => Err(StrataError::Io(format!("{}: {}", path.display(), e))),
    }
}
