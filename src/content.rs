//! Static page content: menu items, contact details, phone numbers and the
//! entrance-animation timing tables. Everything here is configuration data,
//! the components only render it.

#[derive(Debug, PartialEq)]
pub struct MenuItem {
    pub image: &'static str,
    pub alt: &'static str,
    pub name: &'static str,
    pub price: &'static str,
    pub badge: &'static str,
    pub description: &'static str,
}

pub const MENU_ITEMS: &[MenuItem] = &[
    MenuItem {
        image: "/images/tra-tac.jpeg",
        alt: "Trà Tắc - Lemon Tea",
        name: "Trà Tắc",
        price: "15,000đ",
        badge: "Bán chạy",
        description: "Trà tắc tươi, thanh mát với vị chua ngọt hài hòa. Thức uống giải nhiệt tuyệt vời cho ngày nắng nóng.",
    },
    MenuItem {
        image: "/images/mi.jpeg",
        alt: "Mì Đặc Biệt - Special Noodles",
        name: "Mì Đặc Biệt",
        price: "30,000đ",
        badge: "Đặc sản",
        description: "Mì tươi được chế biến theo công thức truyền thống, kết hợp với các loại topping đa dạng và nước dùng đậm đà.",
    },
];

#[derive(Debug, PartialEq)]
pub struct ContactRow {
    pub icon: &'static str,
    pub text: &'static str,
}

pub const CONTACT_ROWS: &[ContactRow] = &[
    ContactRow { icon: "📍", text: "An Đào, Trâu Quỳ, Gia Lâm, Hà Nội" },
    ContactRow { icon: "📞", text: "+84 972 744 027 hoặc +84 187 098 005" },
    ContactRow { icon: "✉️", text: "contact@buihuyen.com" },
    ContactRow { icon: "🕒", text: "Mở cửa: 8:00 - 22:00 hàng ngày" },
];

#[derive(Debug, PartialEq)]
pub struct PhoneNumber {
    pub number: &'static str,
    pub label: &'static str,
}

pub const PHONE_NUMBERS: &[PhoneNumber] = &[
    PhoneNumber { number: "+84 972 744 027", label: "Hotline 1" },
    PhoneNumber { number: "+84 187 098 005", label: "Hotline 2" },
];

/// `tel:` link for a display number; the URI part carries no whitespace.
pub fn tel_href(number: &str) -> String {
    let compact: String = number.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{compact}")
}

// SVG path data shared between the call button and the phone popup.
pub const PHONE_ICON: &str = "M6.62 10.79a15.91 15.91 0 006.59 6.59l2.2-2.2a1 1 0 011.11-.27 11.18 11.18 0 003.48.55 1 1 0 011 1V20a1 1 0 01-1 1A17 17 0 013 4a1 1 0 011-1h3.5a1 1 0 011 1 11.18 11.18 0 00.55 3.48 1 1 0 01-.27 1.11l-2.16 2.2z";
pub const CHECK_CIRCLE_ICON: &str = "M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm-2 15l-5-5 1.41-1.41L10 14.17l7.59-7.59L19 8l-9 9z";
pub const CHEVRON_ICON: &str = "M9 5l7 7-7 7";
pub const CLOSE_ICON: &str = "M6 18L18 6M6 6l12 12";

// Intersection thresholds per tracked section.
pub const HERO_THRESHOLD: f64 = 0.3;
pub const MENU_THRESHOLD: f64 = 0.2;
pub const ABOUT_THRESHOLD: f64 = 0.3;
pub const CONTACT_THRESHOLD: f64 = 0.2;

/// Hero reveal choreography: title, subtitle, description, buttons.
pub const HERO_SEQUENCE_MS: [u32; 4] = [200, 800, 1200, 1600];

pub const ABOUT_DELAY_MS: u32 = 100;
pub const CONTACT_DELAY_MS: u32 = 0;

/// Staggered trail: items share one trigger but start `step_ms` apart,
/// in list order.
pub struct Trail {
    pub base_ms: u32,
    pub step_ms: u32,
}

impl Trail {
    pub const fn delay_for(&self, index: usize) -> u32 {
        self.base_ms + self.step_ms * index as u32
    }
}

pub const MENU_TRAIL: Trail = Trail { base_ms: 200, step_ms: 150 };
pub const CONTACT_TRAIL: Trail = Trail { base_ms: 400, step_ms: 120 };

pub const LOCAL_IMAGE_PREFIX: &str = "/images/";

/// The only remote host images may be served from; everything else is bundled.
pub const REMOTE_IMAGE_HOST: &str = "randomuser.me";

pub fn image_src_allowed(src: &str) -> bool {
    if let Some(rest) = src.strip_prefix("https://") {
        match rest.strip_prefix(REMOTE_IMAGE_HOST) {
            Some(tail) => tail.is_empty() || tail.starts_with('/'),
            None => false,
        }
    } else {
        src.starts_with(LOCAL_IMAGE_PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tel_href_strips_whitespace() {
        assert_eq!(tel_href("+84 972 744 027"), "tel:+84972744027");
        assert_eq!(tel_href("+84 187 098 005"), "tel:+84187098005");
    }

    #[test]
    fn tel_href_matches_popup_entries() {
        for phone in PHONE_NUMBERS {
            let href = tel_href(phone.number);
            assert!(href.starts_with("tel:+84"));
            assert!(!href.contains(' '));
        }
    }

    #[test]
    fn trail_delays_increase_in_list_order() {
        assert!(MENU_TRAIL.delay_for(0) < MENU_TRAIL.delay_for(1));
        for i in 0..CONTACT_ROWS.len() - 1 {
            assert!(CONTACT_TRAIL.delay_for(i) < CONTACT_TRAIL.delay_for(i + 1));
        }
    }

    #[test]
    fn hero_sequence_is_staged() {
        assert!(HERO_SEQUENCE_MS.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn menu_images_are_bundled() {
        assert_eq!(MENU_ITEMS.len(), 2);
        for item in MENU_ITEMS {
            assert!(image_src_allowed(item.image));
        }
    }

    #[test]
    fn remote_images_restricted_to_allowed_host() {
        assert!(image_src_allowed("https://randomuser.me/api/portraits/women/1.jpg"));
        assert!(!image_src_allowed("https://example.com/food.jpg"));
        assert!(!image_src_allowed("http://randomuser.me/x.jpg"));
        assert!(!image_src_allowed("https://randomuser.me.evil.com/x.jpg"));
        assert!(!image_src_allowed("images/tra-tac.jpeg"));
    }
}
