//! Offline rule responder.
//!
//! Answers from a fixed keyword table without any network access. Used for
//! demos and tests, or when no credential is available.

/// Answer returned when no rule matches.
pub const FALLBACK_ANSWER: &str = "Tôi chưa có thông tin về vấn đề này.";

/// A keyword rule. Matches if any keyword occurs in the lower-cased question.
struct Rule {
    keywords: &'static [&'static str],
    answer: &'static str,
}

/// Rules are tried in order; the first match wins.
const RULES: &[Rule] = &[
    Rule {
        keywords: &["nội chiến", "civil war"],
        answer: "Giai đoạn 1954–1964 mang cả yếu tố nội chiến (hai chính quyền Việt Nam đối lập) lẫn yếu tố quốc tế (sự can thiệp ngày càng sâu của Hoa Kỳ và sự hậu thuẫn của khối xã hội chủ nghĩa cho miền Bắc). Cách nhìn phụ thuộc vào việc nhấn mạnh chủ thể nào.",
    },
    Rule {
        keywords: &["genève", "geneva", "geneve", "hiệp định"],
        answer: "Hiệp định Genève (7/1954) chấm dứt chiến tranh Đông Dương, tạm thời chia Việt Nam tại vĩ tuyến 17 và quy định tổng tuyển cử thống nhất vào tháng 7/1956.",
    },
    Rule {
        keywords: &["tổng tuyển cử", "1956", "election"],
        answer: "Cuộc tổng tuyển cử thống nhất dự kiến tháng 7/1956 đã không diễn ra do chính quyền Ngô Đình Diệm, với sự ủng hộ của Hoa Kỳ, từ chối tham gia.",
    },
    Rule {
        keywords: &["đồng khởi", "nghị quyết 15", "nq 15"],
        answer: "Nghị quyết 15 (1959) cho phép kết hợp đấu tranh chính trị với đấu tranh vũ trang ở miền Nam, mở đường cho phong trào Đồng khởi năm 1959–1960, tiêu biểu ở Bến Tre.",
    },
    Rule {
        keywords: &["mặt trận", "nlf", "giải phóng"],
        answer: "Mặt trận Dân tộc Giải phóng miền Nam Việt Nam được thành lập ngày 20/12/1960, tập hợp các lực lượng chống chính quyền Sài Gòn với sự chỉ đạo của miền Bắc.",
    },
    Rule {
        keywords: &["chiến tranh đặc biệt", "ấp chiến lược", "strategic hamlet"],
        answer: "Từ 1961, Hoa Kỳ triển khai \"chiến tranh đặc biệt\": quân đội Sài Gòn chiến đấu với cố vấn và vũ khí Mỹ, kết hợp chương trình ấp chiến lược nhằm tách dân khỏi lực lượng cách mạng.",
    },
    Rule {
        keywords: &["phật giáo", "đảo chính", "ngô đình diệm", "coup"],
        answer: "Khủng hoảng Phật giáo năm 1963 làm suy yếu chính quyền Ngô Đình Diệm; cuộc đảo chính ngày 1/11/1963 lật đổ và sát hại ông Diệm, mở ra giai đoạn bất ổn chính trị ở Sài Gòn.",
    },
    Rule {
        keywords: &["vịnh bắc bộ", "tonkin"],
        answer: "Sự kiện Vịnh Bắc Bộ (8/1964) dẫn tới Nghị quyết Vịnh Bắc Bộ của Quốc hội Mỹ, trao cho Tổng thống Johnson quyền mở rộng can thiệp quân sự tại Việt Nam.",
    },
    Rule {
        keywords: &["đường mòn", "trường sơn", "hồ chí minh trail"],
        answer: "Tuyến vận tải chiến lược Trường Sơn (đường mòn Hồ Chí Minh) được mở từ năm 1959 để chi viện người và vũ khí từ miền Bắc vào miền Nam.",
    },
];

/// Keyword-table responder. Stateless; the preamble is ignored.
#[derive(Clone, Copy)]
pub struct OfflineResponder {
    rules: &'static [Rule],
}

impl OfflineResponder {
    /// Responder over the built-in rule table.
    pub const fn new() -> Self {
        Self { rules: RULES }
    }

    /// Answer `question` from the rule table, or [`FALLBACK_ANSWER`].
    pub fn answer(&self, question: &str) -> &'static str {
        let lowered = question.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.keywords.iter().any(|k| lowered.contains(k)))
            .map_or(FALLBACK_ANSWER, |rule| rule.answer)
    }
}

impl Default for OfflineResponder {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for OfflineResponder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OfflineResponder")
            .field("rules", &self.rules.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_case_insensitively() {
        let answer = OfflineResponder::new().answer("Hiệp định GENÈVE quy định gì?");
        assert!(answer.contains("vĩ tuyến 17"));
    }

    #[test]
    fn first_rule_wins() {
        // Mentions both Genève and the 1956 election; the Genève rule is first.
        let answer = OfflineResponder::new().answer("Genève và tổng tuyển cử 1956");
        assert!(answer.starts_with("Hiệp định Genève"));
    }

    #[test]
    fn unknown_question_falls_back() {
        assert_eq!(OfflineResponder::new().answer("Thời tiết hôm nay?"), FALLBACK_ANSWER);
    }

    #[test]
    fn every_rule_is_reachable() {
        for rule in RULES {
            let first = rule.keywords.first().copied().unwrap_or_default();
            assert!(!first.is_empty());
            assert_eq!(OfflineResponder::new().answer(first), rule.answer);
        }
    }
}
