//! Locales and the message catalog.
//!
//! Every user-visible string goes through [`text`] so the whole UI follows
//! the active locale. The catalog is resolved by message key, one table per
//! locale.

use serde::{Deserialize, Serialize};

/// Supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    En,
    Tr,
}

impl Locale {
    /// All locales, in cycle order.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Tr];

    /// Convert to string for storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Tr => "tr",
        }
    }

    /// Parse from stored string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "en" => Some(Locale::En),
            "tr" => Some(Locale::Tr),
            _ => None,
        }
    }

    /// The next locale in the cycle.
    pub fn next(&self) -> Locale {
        match self {
            Locale::En => Locale::Tr,
            Locale::Tr => Locale::En,
        }
    }
}

/// Message keys for every translatable string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    EmployeeList,
    AddEmployee,
    EditEmployee,
    PageNotFound,
    PageNotFoundBody,
    NoData,
    FirstName,
    LastName,
    DateOfEmployment,
    DateOfBirth,
    Phone,
    Email,
    Department,
    Position,
    Actions,
    Edit,
    Delete,
    Cancel,
    Submit,
    Select,
    DeleteSelected,
    ConfirmDeleteQuestion,
    CannotBeUndone,
    EmailExists,
    PhoneExists,
    Required,
    TooShort,
    TooLong,
    InvalidPhone,
    InvalidEmail,
    InvalidDate,
}

/// Resolve a message key in the given locale.
pub fn text(locale: Locale, msg: Msg) -> &'static str {
    match locale {
        Locale::En => english(msg),
        Locale::Tr => turkish(msg),
    }
}

fn english(msg: Msg) -> &'static str {
    match msg {
        Msg::EmployeeList => "Employee List",
        Msg::AddEmployee => "Add Employee",
        Msg::EditEmployee => "Edit Employee",
        Msg::PageNotFound => "Page Not Found",
        Msg::PageNotFoundBody => "The page you're looking for not found.",
        Msg::NoData => "No data available",
        Msg::FirstName => "First Name",
        Msg::LastName => "Last Name",
        Msg::DateOfEmployment => "Date of Employment",
        Msg::DateOfBirth => "Date of Birth",
        Msg::Phone => "Phone",
        Msg::Email => "E-Mail",
        Msg::Department => "Department",
        Msg::Position => "Position",
        Msg::Actions => "Actions",
        Msg::Edit => "Edit",
        Msg::Delete => "Delete",
        Msg::Cancel => "Cancel",
        Msg::Submit => "Submit",
        Msg::Select => "Select",
        Msg::DeleteSelected => "Delete Selected",
        Msg::ConfirmDeleteQuestion => "Are you sure you want to delete this employee?",
        Msg::CannotBeUndone => "This action cannot be undone.",
        Msg::EmailExists => "Email already exists",
        Msg::PhoneExists => "Phone already exists",
        Msg::Required => "This field is required",
        Msg::TooShort => "Must be at least 2 characters",
        Msg::TooLong => "Must be at most 100 characters",
        Msg::InvalidPhone => "Invalid phone (format: +90 555 444 3322)",
        Msg::InvalidEmail => "Invalid email address",
        Msg::InvalidDate => "Invalid date (format: YYYY-MM-DD)",
    }
}

fn turkish(msg: Msg) -> &'static str {
    match msg {
        Msg::EmployeeList => "Çalışan Listesi",
        Msg::AddEmployee => "Çalışan Ekle",
        Msg::EditEmployee => "Çalışan Düzenle",
        Msg::PageNotFound => "Sayfa Bulunamadı",
        Msg::PageNotFoundBody => "Aradığınız sayfa bulunamadı.",
        Msg::NoData => "Veri bulunamadı",
        Msg::FirstName => "Ad",
        Msg::LastName => "Soyad",
        Msg::DateOfEmployment => "İşe Giriş Tarihi",
        Msg::DateOfBirth => "Doğum Tarihi",
        Msg::Phone => "Telefon",
        Msg::Email => "E-posta",
        Msg::Department => "Departman",
        Msg::Position => "Pozisyon",
        Msg::Actions => "İşlemler",
        Msg::Edit => "Düzenle",
        Msg::Delete => "Sil",
        Msg::Cancel => "İptal",
        Msg::Submit => "Kaydet",
        Msg::Select => "Seçiniz",
        Msg::DeleteSelected => "Seçilenleri Sil",
        Msg::ConfirmDeleteQuestion => "Bu çalışanı silmek istediğinizden emin misiniz?",
        Msg::CannotBeUndone => "Bu işlem geri alınamaz.",
        Msg::EmailExists => "E-posta zaten kayıtlı",
        Msg::PhoneExists => "Telefon zaten kayıtlı",
        Msg::Required => "Bu alan zorunludur",
        Msg::TooShort => "En az 2 karakter olmalıdır",
        Msg::TooLong => "En fazla 100 karakter olabilir",
        Msg::InvalidPhone => "Geçersiz telefon (format: +90 555 444 3322)",
        Msg::InvalidEmail => "Geçersiz e-posta adresi",
        Msg::InvalidDate => "Geçersiz tarih (format: YYYY-AA-GG)",
    }
}
