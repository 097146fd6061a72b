//! Site24x7 data centers and their API and accounts server endpoints

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataCenter {
    pub code: &'static str,
    pub api_base_url: &'static str,
    pub token_url: &'static str,
}

pub const DATA_CENTERS: [DataCenter; 7] = [
    DataCenter {
        code: "US",
        api_base_url: "https://www.site24x7.com/api",
        token_url: "https://accounts.zoho.com/oauth/v2/token",
    },
    DataCenter {
        code: "EU",
        api_base_url: "https://www.site24x7.eu/api",
        token_url: "https://accounts.zoho.eu/oauth/v2/token",
    },
    DataCenter {
        code: "IN",
        api_base_url: "https://www.site24x7.in/api",
        token_url: "https://accounts.zoho.in/oauth/v2/token",
    },
    DataCenter {
        code: "AU",
        api_base_url: "https://www.site24x7.net.au/api",
        token_url: "https://accounts.zoho.com.au/oauth/v2/token",
    },
    DataCenter {
        code: "CN",
        api_base_url: "https://www.site24x7.cn/api",
        token_url: "https://accounts.zoho.com.cn/oauth/v2/token",
    },
    DataCenter {
        code: "JP",
        api_base_url: "https://www.site24x7.jp/api",
        token_url: "https://accounts.zoho.jp/oauth/v2/token",
    },
    DataCenter {
        code: "CA",
        api_base_url: "https://www.site24x7.ca/api",
        token_url: "https://accounts.zohocloud.ca/oauth/v2/token",
    },
];

impl DataCenter {
    pub fn from_code(code: &str) -> Option<&'static DataCenter> {
        let code = code.trim();
        DATA_CENTERS
            .iter()
            .find(|data_center| data_center.code.eq_ignore_ascii_case(code))
    }

    pub fn codes() -> Vec<&'static str> {
        DATA_CENTERS.iter().map(|data_center| data_center.code).collect()
    }
}
