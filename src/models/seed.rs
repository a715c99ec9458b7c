//! Static fixture data the store starts from on every launch.

use super::*;
use chrono::{DateTime, NaiveDate, Utc};

fn place(region: &str, province: &str, city: &str, barangay: &str, street: Option<&str>) -> Location {
    Location::Structured(Subdivision {
        region: region.to_string(),
        province: province.to_string(),
        city: city.to_string(),
        barangay: barangay.to_string(),
        street: street.map(str::to_string),
    })
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}

pub fn owners() -> Vec<Owner> {
    vec![
        Owner {
            id: "owner-1".to_string(),
            name: "Ali Abdullah".to_string(),
            avatar: "/profile.jpg".to_string(),
            email: "ali.abdullah@gmail.com".to_string(),
            phone: Some("056 3015516".to_string()),
        },
        Owner {
            id: "owner-2".to_string(),
            name: "Bob Williams".to_string(),
            avatar: "https://placehold.co/100x100.png".to_string(),
            email: "bob.w@example.com".to_string(),
            phone: None,
        },
    ]
}

pub fn renters() -> Vec<Renter> {
    vec![
        Renter {
            id: "renter-1".to_string(),
            name: "Charlie Davis".to_string(),
            avatar: "https://placehold.co/100x100.png".to_string(),
        },
        Renter {
            id: "renter-2".to_string(),
            name: "Diana Prince".to_string(),
            avatar: "https://placehold.co/100x100.png".to_string(),
        },
    ]
}

pub fn properties() -> Vec<Property> {
    vec![
        Property {
            id: "prop-1".to_string(),
            title: "Modern Downtown Apartment".to_string(),
            description: "A stylish and modern apartment in the heart of the city. Perfect for young professionals. Comes with all modern amenities and a great view of the city skyline.".to_string(),
            property_type: PropertyType::Apartment,
            price: 2200.0,
            location: place("NCR", "Metro Manila", "Makati", "Poblacion", Some("Kalayaan Avenue")),
            images: strings(&["/listing-1.jpg", "/listing-2.jpg"]),
            featured: true,
            owner_id: "owner-1".to_string(),
            details: Details { beds: Some(2), baths: Some(2), sqft: None },
            amenities: strings(&["WiFi", "Kitchen", "Air Conditioning", "Gym", "Pool"]),
            available_now: true,
            furnishing: Furnishing::Furnished,
            paused: false,
            analytics: Some(Analytics { views: 1204, inquiries: 37 }),
        },
        Property {
            id: "prop-2".to_string(),
            title: "Private Room in Shared House".to_string(),
            description: "Charming room in a quiet suburban neighborhood. Ideal for students or single professionals. Access to shared kitchen and living spaces.".to_string(),
            property_type: PropertyType::Room,
            price: 800.0,
            location: place("NCR", "Metro Manila", "Quezon City", "Diliman", None),
            images: strings(&["/listing-3.jpg", "/listing-4.jpg"]),
            featured: false,
            owner_id: "owner-2".to_string(),
            details: Details { beds: Some(1), baths: Some(1), sqft: None },
            amenities: strings(&["WiFi", "Kitchen", "Washer", "Dryer"]),
            available_now: false,
            furnishing: Furnishing::Furnished,
            paused: false,
            analytics: None,
        },
        Property {
            id: "prop-3".to_string(),
            title: "Affordable Bedspace for Rent".to_string(),
            description: "A cozy and affordable bedspace in a shared room. Includes a personal locker. Great for those on a tight budget.".to_string(),
            property_type: PropertyType::Bedspace,
            price: 300.0,
            location: place("Region VII", "Cebu", "Cebu City", "Lahug", None),
            images: strings(&["/listing-2.jpg"]),
            featured: false,
            owner_id: "owner-1".to_string(),
            details: Details::default(),
            amenities: strings(&["WiFi", "Shared Bathroom", "Air Conditioning"]),
            available_now: true,
            furnishing: Furnishing::Furnished,
            paused: false,
            analytics: Some(Analytics { views: 311, inquiries: 12 }),
        },
        Property {
            id: "prop-4".to_string(),
            title: "Spacious Commercial Space".to_string(),
            description: "Prime commercial space on a busy street. Excellent for a retail store or a modern office. High foot traffic area.".to_string(),
            property_type: PropertyType::Commercial,
            price: 5000.0,
            location: place("NCR", "Metro Manila", "Taguig", "Fort Bonifacio", Some("26th Street")),
            images: strings(&["/listing-3.jpg"]),
            featured: true,
            owner_id: "owner-2".to_string(),
            details: Details { beds: None, baths: None, sqft: Some(2000) },
            amenities: strings(&["High-Speed Internet", "Central Air", "Parking", "Security System"]),
            available_now: true,
            furnishing: Furnishing::Unfurnished,
            paused: false,
            analytics: None,
        },
        Property {
            id: "prop-5".to_string(),
            title: "Unfurnished Studio Apartment".to_string(),
            description: "A blank canvas for you to make your own. This bright and airy studio apartment with large windows is ready for your personal touch. Close to public transportation and local cafes.".to_string(),
            property_type: PropertyType::Apartment,
            price: 1500.0,
            location: place("Region IV-A", "Laguna", "Santa Rosa", "Balibago", None),
            images: strings(&["/listing-2.jpg"]),
            featured: false,
            owner_id: "owner-1".to_string(),
            details: Details { beds: Some(1), baths: Some(1), sqft: None },
            amenities: strings(&["Kitchenette", "Air Conditioning", "Parking"]),
            available_now: false,
            furnishing: Furnishing::Unfurnished,
            paused: false,
            analytics: Some(Analytics { views: 98, inquiries: 4 }),
        },
    ]
}

fn message(id: &str, sender_id: &str, text: &str, timestamp: DateTime<Utc>) -> Message {
    Message {
        id: id.to_string(),
        sender_id: sender_id.to_string(),
        text: text.to_string(),
        timestamp,
    }
}

pub fn conversations() -> Vec<Conversation> {
    let owners = owners();
    let renters = renters();

    vec![
        Conversation {
            id: "convo-1".to_string(),
            property: PropertyRef {
                id: "prop-1".to_string(),
                title: "Modern Downtown Apartment".to_string(),
                image: "/listing-1.jpg".to_string(),
            },
            owner: owners[0].clone(),
            renter: renters[0].clone(),
            messages: vec![
                message("msg-1-1", "renter-1", "Hi, is this apartment still available?", at(2024, 5, 20, 10, 0)),
                message("msg-1-2", "owner-1", "Hello! Yes, it is. Are you interested in a viewing?", at(2024, 5, 20, 10, 5)),
                message("msg-1-3", "renter-1", "Great! How about tomorrow afternoon?", at(2024, 5, 20, 10, 6)),
            ],
        },
        Conversation {
            id: "convo-2".to_string(),
            property: PropertyRef {
                id: "prop-4".to_string(),
                title: "Spacious Commercial Space".to_string(),
                image: "/listing-3.jpg".to_string(),
            },
            owner: owners[1].clone(),
            renter: renters[1].clone(),
            messages: vec![
                message("msg-2-1", "renter-2", "Good morning, I have a few questions about the commercial space.", at(2024, 5, 19, 9, 0)),
                message("msg-2-2", "owner-2", "Sure, I'd be happy to answer them.", at(2024, 5, 19, 9, 10)),
            ],
        },
        Conversation {
            id: "convo-3".to_string(),
            property: PropertyRef {
                id: "prop-3".to_string(),
                title: "Affordable Bedspace for Rent".to_string(),
                image: "/listing-2.jpg".to_string(),
            },
            owner: owners[0].clone(),
            renter: renters[1].clone(),
            messages: vec![
                message("msg-3-1", "renter-2", "Can you tell me more about the rules for the bedspace?", at(2024, 5, 21, 11, 0)),
                message("msg-3-2", "owner-1", "Of course. The main rules are no smoking and keeping the shared space clean.", at(2024, 5, 21, 11, 5)),
                message("msg-3-3", "renter-2", "Sounds good, thank you!", at(2024, 5, 21, 11, 6)),
            ],
        },
    ]
}
