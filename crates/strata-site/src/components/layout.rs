//! 공통 레이아웃 조각 (내비게이션, 푸터).

use crate::template::TemplateSet;

/// 사이트 페이지.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SitePage {
    Sp500,
    Crypto,
    Dashboard,
}

impl SitePage {
    pub const ALL: [SitePage; 3] = [SitePage::Sp500, SitePage::Crypto, SitePage::Dashboard];

    /// 출력 파일 이름
    pub fn file_name(&self) -> &'static str {
        match self {
            SitePage::Sp500 => "index.html",
            SitePage::Crypto => "crypto.html",
            SitePage::Dashboard => "dashboard.html",
        }
    }

    /// 내비게이션 템플릿의 슬롯 이름
    fn nav_slot(&self) -> &'static str {
        match self {
            SitePage::Sp500 => "nav_index",
            SitePage::Crypto => "nav_crypto",
            SitePage::Dashboard => "nav_dashboard",
        }
    }
}

/// 현재 페이지 링크를 활성화한 내비게이션.
pub fn navbar(templates: &TemplateSet, current: SitePage) -> String {
    let mut page = templates.navbar.page();
    for candidate in SitePage::ALL {
        let class = if candidate == current { "active" } else { "" };
        page.fill(candidate.nav_slot(), class);
    }
    page.render()
}

/// 생성 시각이 들어간 푸터.
pub fn footer(templates: &TemplateSet, generated_at: &str) -> String {
    let mut page = templates.footer.page();
    page.fill_text("generated_at", generated_at);
    page.render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_link() {
        let templates = TemplateSet::builtin().unwrap();
        let nav = navbar(&templates, SitePage::Crypto);

        assert!(nav.contains(r#"href="crypto.html" class="nav-link active""#));
        assert!(nav.contains(r#"href="index.html" class="nav-link ""#));
    }

    #[test]
    fn test_footer() {
        let templates = TemplateSet::builtin().unwrap();
        assert!(footer(&templates, "2026-10-18 06:00 UTC").contains("2026-10-18 06:00 UTC"));
    }
}
