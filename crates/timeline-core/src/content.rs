//! History page content: timeline milestones, actor cards, the debate, the
//! conclusion and reference sources.

use timeline_types::{
    ActorProfile, ConclusionPoint, DebatePoint, HistoryContent, SourceRef, TimelineEntry, YearSpan,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

fn entry(id: &str, span: YearSpan, title: &str, description: &str, details: &[&str]) -> TimelineEntry {
    TimelineEntry {
        id: id.to_owned(),
        span,
        title: title.to_owned(),
        description: description.to_owned(),
        details: strings(details),
    }
}

const fn single(year: i32) -> YearSpan {
    YearSpan::Single { year }
}

const fn range(start: i32, end: i32) -> YearSpan {
    YearSpan::Range { start, end }
}

/// Build the full history page content.
#[allow(clippy::too_many_lines)]
pub fn history_content() -> HistoryContent {
    let timeline = vec![
        entry(
            "geneva-1954",
            single(1954),
            "Hiệp định Genève",
            "Đình chỉ chiến sự; giới tuyến quân sự tạm thời; dự kiến tổng tuyển cử thống nhất.",
            &[
                "Thiết lập giới tuyến quân sự tạm thời ở vĩ tuyến 17; lực lượng hai bên tập kết.",
                "Dự kiến hiệp thương tổng tuyển cử trong năm 1956 để thống nhất đất nước.",
                "Quốc tế công nhận tính tạm thời của ranh giới; không phải chia cắt vĩnh viễn.",
            ],
        ),
        entry(
            "phase-1954-58",
            range(1954, 1958),
            "Tái thiết MB, củng cố MN",
            "MB: củng cố hậu phương; MN: “tố cộng diệt cộng”, Luật 10-59 (1957–1959) đàn áp phong trào.",
            &[
                "Trung ương 6 (7/1954), Bộ Chính trị 9/1954, TƯ 7 & 8 (1955): ưu tiên củng cố miền Bắc, đấu tranh thống nhất.",
                "Miền Nam: chính quyền Ngô Đình Diệm bình định, chiến dịch “tố cộng diệt cộng”.",
                "Luật 10–59 lập toà án quân sự đặc biệt, mức án nặng; ảnh hưởng lớn đến phong trào cách mạng ở MN.",
            ],
        ),
        entry(
            "election-1955-56",
            range(1955, 1956),
            "Bế tắc hiệp thương – tổng tuyển cử",
            "VNCH/Mỹ không hiệp thương tổng tuyển cử (1956) → bế tắc thống nhất.",
            &[
                "Hai miền không đạt đồng thuận về tổ chức tổng tuyển cử theo tinh thần Genève.",
                "Bế tắc chính trị tạo nền cho chuyển pha đấu tranh tại MN giai đoạn sau.",
            ],
        ),
        entry(
            "shift-1959-60",
            range(1959, 1960),
            "Chuyển pha đấu tranh ở miền Nam",
            "Triển khai Nghị quyết 15 (1959) → cơ sở cho Đồng khởi lan rộng 1959–1960.",
            &[
                "NQ 15 xác lập hai nhiệm vụ chiến lược: CNXH ở MB; CM dân tộc–dân chủ ở MN.",
                "Con đường cơ bản ở MN: khởi nghĩa giành chính quyền khi có điều kiện.",
                "Đồng khởi bùng nổ từ Bến Tre lan rộng, làm tan rã một mảng chính quyền cơ sở VNCH ở nông thôn.",
            ],
        ),
        entry(
            "nlf-1960-61",
            range(1960, 1961),
            "MTDTGPMN & Quân Giải phóng",
            "12/1960 thành lập Mặt trận; 2/1961 hình thành Quân Giải phóng MN.",
            &[
                "Mặt trận là liên minh chính trị rộng rãi của các lực lượng ở MN.",
                "QGP MN ra đời 2/1961, thống nhất lực lượng vũ trang cách mạng tại chỗ.",
                "Tạo thế đối trọng chính trị – quân sự với bộ máy VNCH ở nông thôn.",
            ],
        ),
        entry(
            "specialwar-1961-64",
            range(1961, 1964),
            "“Chiến tranh đặc biệt”",
            "Cố vấn–viện trợ Mỹ, quân VNCH tác chiến; ấp chiến lược, trực thăng vận.",
            &[
                "Kế hoạch Staley–Taylor: Mỹ cung cấp cố vấn, vũ khí, hậu cần; VNCH tác chiến chủ lực.",
                "“Ấp chiến lược” nhằm cô lập lực lượng cách mạng ở nông thôn.",
                "Thích ứng chiến thuật của phía cách mạng: điển hình trận Ấp Bắc (1/1963).",
                "Khủng hoảng chính trị dẫn đến đảo chính 11/1963, làm suy yếu VNCH.",
            ],
        ),
        entry(
            "crisis-1963",
            single(1963),
            "Khủng hoảng 1963 & đảo chính",
            "Biến cố Phật giáo; lật đổ Ngô Đình Diệm (11/1963).",
            &[
                "Khủng hoảng Phật giáo bùng nổ sau các sự kiện đàn áp.",
                "Đảo chính 11/1963: chế độ Ngô Đình Diệm sụp đổ, tình trạng bất ổn kéo dài.",
            ],
        ),
        entry(
            "tonkin-1964",
            single(1964),
            "Sự kiện Vịnh Bắc Bộ",
            "8/1964: Nghị quyết Vịnh Bắc Bộ → mở đường cho can dự trực tiếp của Hoa Kỳ.",
            &[
                "Quốc hội Mỹ trao quyền rộng cho hành pháp (Gulf of Tonkin Resolution).",
                "Sau đó Mỹ oanh kích miền Bắc (Pierce Arrow) và chuẩn bị đưa quân (sang 1965).",
                "“Chiến tranh đặc biệt” bộc lộ thất bại; chuyển sang “chiến tranh cục bộ”.",
            ],
        ),
    ];

    let actors = vec![
        profile(
            "party-line",
            "Đường lối của Đảng",
            "Tóm lược mốc chính",
            "Đặc điểm: một Đảng lãnh đạo hai cuộc cách mạng Bắc–Nam; cơ sở định ra chiến lược chung.",
            &[
                "NQ 15 (1959): hợp thức hóa đấu tranh vũ trang ở MN",
                "ĐH III (1960): hoàn chỉnh đường lối chiến lược chung",
                "Ý nghĩa: sức mạnh tổng hợp chống Mỹ",
            ],
        ),
        profile(
            "north-meaning",
            "Vai trò Miền Bắc",
            "Hậu phương lớn",
            "Xây dựng CNXH; chủ trương công–nông nghiệp; chuẩn bị lực lượng cho kháng chiến lâu dài.",
            &["Hậu phương quyết định", "Nghị quyết 1961–1964", "Cơ sở vững chắc cho đấu tranh"],
        ),
        profile(
            "south-meaning",
            "Vai trò Miền Nam",
            "Tiền tuyến lớn",
            "Đồng khởi thay đổi tương quan lực lượng; MTDTGPMN ra đời tạo chính trị–quân sự hợp pháp.",
            &["Đồng khởi 1959–1960", "MTDTGPMN 1960", "Quân Giải phóng 1961"],
        ),
        profile(
            "strategic",
            "Tầm vóc chiến lược",
            "Hai nhiệm vụ chiến lược",
            "Huy động sức mạnh cả nước và quốc tế; đặt nền cho thắng lợi trước “chiến tranh đặc biệt”.",
            &["Sức mạnh toàn dân", "Ủng hộ quốc tế", "Bước chuẩn bị cho 1965–1975"],
        ),
    ];

    let debate = vec![
        DebatePoint {
            title: String::from("Yếu tố quốc tế & quy chế pháp lý sau Genève"),
            points: strings(&[
                "Genève xác định chia cắt chỉ là tạm thời, hướng tới tổng tuyển cử 7/1956; không phải hai quốc gia độc lập.",
            ]),
        },
        DebatePoint {
            title: String::from("Sự can dự quyết định của Hoa Kỳ"),
            points: strings(&[
                "VNCH từ chối tổng tuyển cử dưới sự bảo trợ của Mỹ.",
                "Mỹ tài trợ ~80% ngân sách quân sự VNCH thời kỳ đầu; nâng cấp thành “chiến tranh đặc biệt”.",
            ]),
        },
        DebatePoint {
            title: String::from("Bản chất đường lối cách mạng"),
            points: strings(&[
                "NQ 15 và ĐH III xác định MN là cách mạng dân tộc–dân chủ chống đế quốc và tay sai.",
                "Mục tiêu: thống nhất đất nước → đấu tranh giải phóng dân tộc, không phải “nội chiến” điển hình.",
            ]),
        },
        DebatePoint {
            title: String::from("Biện pháp đàn áp & nấc thang 1964"),
            points: strings(&[
                "Luật 10–59, hệ thống ấp chiến lược, cố vấn Mỹ → mô hình “thuộc địa kiểu mới”.",
                "Sự kiện Vịnh Bắc Bộ (8/1964) → cớ pháp lý Mỹ mở rộng chiến tranh, quốc tế hóa sâu sắc.",
            ]),
        },
    ];

    let conclusion = vec![
        ConclusionPoint {
            title: String::from("Cơ sở pháp–chính trị sau Genève"),
            body: String::from(
                "Việt Nam là một quốc gia tạm thời chia cắt chờ tổng tuyển cử. Việc VNCH/Mỹ từ chối hiệp thương (1956) khiến tranh chấp kéo dài, không phải hai quốc gia độc lập quyết chiến.",
            ),
        },
        ConclusionPoint {
            title: String::from("Yếu tố quốc tế hóa quyết định"),
            body: String::from(
                "Viện trợ, cố vấn, “chiến tranh đặc biệt”, rồi sự kiện Vịnh Bắc Bộ 1964 mở đường cho Mỹ trực tiếp can thiệp, vượt xa mô hình “xung đột nội bộ thuần túy”.",
            ),
        },
    ];

    let sources = vec![
        source(
            "Loigiaihay – Đường lối 1954–1964",
            "https://loigiaihay.com/duong-loi-trong-giai-doan-1954-1964-c125a20120.html",
        ),
        source(
            "Studocu – Tranh luận “nội chiến” (SV)",
            "https://www.studocu.vn/vn/document/dai-hoc-kinh-te-quoc-dan/e-learning-lich-su-dang-cong-san-viet-nam/y-kien-giai-doan-1954-1975-o-viet-nam-la-noi-chien-dung-hay-sai/88590624",
        ),
        source(
            "Studocu – Câu hỏi Lịch sử Đảng",
            "https://www.studocu.vn/vn/document/dai-hoc-thuy-loi/lich-su-dang-cong-san/cau-hoi-lich-su-dang/87378877",
        ),
        source(
            "Wikipedia – Chiến tranh Việt Nam (1954–1959…)",
            "https://vi.wikipedia.org/wiki/Chi%E1%BA%BFn_tranh_Vi%E1%BB%87t_Nam#Giai_%C4%91o%E1%BA%A1n_1954-1959",
        ),
    ];

    HistoryContent {
        timeline,
        actors,
        debate,
        conclusion_summary: String::from(
            "Giai đoạn 1954–1964 không thể quy giản thành “nội chiến”. Đây là một cuộc đấu tranh giải phóng dân tộc trong bối cảnh Chiến tranh Lạnh, nơi Hoa Kỳ đóng vai trò can thiệp quyết định ở miền Nam.",
        ),
        conclusion,
        conclusion_takeaway: String::from(
            "Giai đoạn 1954–1964 là một xung đột chính trị–quân sự có thành tố nội bộ, nhưng được quốc tế hóa sâu sắc, trong bối cảnh một quốc gia bị chia cắt tạm thời và đấu tranh hướng tới thống nhất.",
        ),
        sources,
    }
}

fn profile(id: &str, name: &str, role: &str, summary: &str, highlights: &[&str]) -> ActorProfile {
    ActorProfile {
        id: id.to_owned(),
        name: name.to_owned(),
        role: role.to_owned(),
        summary: summary.to_owned(),
        highlights: strings(highlights),
    }
}

fn source(label: &str, url: &str) -> SourceRef {
    SourceRef {
        label: label.to_owned(),
        url: url.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn timeline_is_chronological() {
        let content = history_content();
        assert_eq!(content.timeline.len(), 8);
        let starts: Vec<i32> = content.timeline.iter().map(|e| e.span.start()).collect();
        let mut sorted = starts.clone();
        sorted.sort_unstable();
        assert_eq!(starts, sorted);
    }

    #[test]
    fn timeline_ids_are_unique_anchors() {
        let content = history_content();
        let ids: BTreeSet<&str> = content.timeline.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), content.timeline.len());
        assert!(content.timeline.iter().all(|e| !e.details.is_empty()));
    }

    #[test]
    fn spans_stay_inside_the_period() {
        let content = history_content();
        assert!(
            content
                .timeline
                .iter()
                .all(|e| e.span.start() >= 1954 && e.span.end() <= 1964 && e.span.start() <= e.span.end())
        );
    }

    #[test]
    fn sections_are_populated() {
        let content = history_content();
        assert_eq!(content.actors.len(), 4);
        assert_eq!(content.debate.len(), 4);
        assert_eq!(content.conclusion.len(), 2);
        assert_eq!(content.sources.len(), 4);
        assert!(content.sources.iter().all(|s| s.url.starts_with("https://")));
    }
}
