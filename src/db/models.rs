//! Data models for the local stores

use serde::{Deserialize, Serialize};

/// A district-attorney contact record from the contacts store.
///
/// Field declaration order matters: it is the JSON key order callers see,
/// {County, Name, Address, Phone, Fax, Website}.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(rename = "County")]
    pub county: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "Phone")]
    pub phone: String,
    #[serde(rename = "Fax")]
    pub fax: String,
    #[serde(rename = "Website")]
    pub website: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_json_key_order() {
        let contact = Contact {
            county: "Kern".to_string(),
            name: "Office of the DA".to_string(),
            address: "1234 Truxtun Ave".to_string(),
            phone: "661-555-0100".to_string(),
            fax: "661-555-0101".to_string(),
            website: "https://example.gov".to_string(),
        };

        let json = serde_json::to_string(&contact).unwrap();
        let county = json.find("\"County\"").unwrap();
        let name = json.find("\"Name\"").unwrap();
        let address = json.find("\"Address\"").unwrap();
        let phone = json.find("\"Phone\"").unwrap();
        let fax = json.find("\"Fax\"").unwrap();
        let website = json.find("\"Website\"").unwrap();

        assert!(county < name && name < address && address < phone && phone < fax && fax < website);
    }
}
