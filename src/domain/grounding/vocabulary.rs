//! Domain vocabulary and question keyword extraction

/// Commerce, account and file terms recognised in questions (Korean and English)
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "상품", "제품", "product", "item", "goods",
    "주문", "order", "구매", "purchase",
    "회원", "사용자", "유저", "user", "member",
    "파일", "file", "업로드", "upload", "다운로드", "download",
    "인증", "auth", "로그인", "login", "로그아웃", "logout",
    "장바구니", "cart", "basket",
    "결제", "payment", "pay",
    "배송", "delivery", "shipping",
];

/// Matches a fixed vocabulary against question text by substring containment
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    /// (original term, lower-cased term), in vocabulary order
    terms: Vec<(String, String)>,
}

impl KeywordExtractor {
    /// Build from an ordered vocabulary; blank and repeated terms are dropped
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut collected: Vec<(String, String)> = Vec::new();

        for term in terms {
            let term = term.into();
            if term.trim().is_empty() || collected.iter().any(|(t, _)| *t == term) {
                continue;
            }
            let lower = term.to_lowercase();
            collected.push((term, lower));
        }

        Self { terms: collected }
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(|(t, _)| t.as_str())
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Vocabulary terms contained in the question, in vocabulary order
    pub fn extract(&self, question: &str) -> Vec<String> {
        let lower = question.to_lowercase();

        self.terms
            .iter()
            .filter(|(_, term)| lower.contains(term.as_str()))
            .map(|(original, _)| original.clone())
            .collect()
    }
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORDS.iter().copied())
    }
}
