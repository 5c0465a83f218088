//! The builtin document templates.
//!
//! Adding a new document kind means appending a constructor here and
//! registering it in the builtin registry; there is no dynamic
//! registration API.

use crate::models::template::{DocumentTemplate, FieldDefinition, FieldType};

const SSN_PATTERN: &str = r"^\d{3}-\d{2}-\d{4}$";

/// Free Application for Federal Student Aid.
pub fn fafsa_template() -> DocumentTemplate {
    DocumentTemplate::new(
        "fafsa",
        "FAFSA",
        "FAFSA",
        "Free Application for Federal Student Aid",
    )
    .with_keywords(&["fafsa", "federal student aid", "application", "dependency"])
    .with_fields(vec![
        FieldDefinition::new("studentName", "Student Name", FieldType::Text, true)
            .with_description("Full legal name of the student"),
        FieldDefinition::new("ssn", "SSN", FieldType::Ssn, true)
            .with_pattern(SSN_PATTERN)
            .with_description("Social Security Number (XXX-XX-XXXX)"),
        FieldDefinition::new("dateOfBirth", "Date of Birth", FieldType::Date, true)
            .with_description("Student's date of birth (MM/DD/YYYY)"),
        FieldDefinition::new(
            "expectedFamilyContribution",
            "Expected Family Contribution",
            FieldType::Currency,
            true,
        )
        .with_description("EFC amount in dollars"),
        FieldDefinition::new("filingStatus", "Filing Status", FieldType::Text, true)
            .with_description("Tax filing status (Single, Married, Head of Household, etc.)"),
        FieldDefinition::new("totalIncome", "Total Income", FieldType::Currency, true)
            .with_description("Total household income"),
        FieldDefinition::new("dependencyStatus", "Dependency Status", FieldType::Text, true)
            .with_description("Dependent or Independent"),
        FieldDefinition::new(
            "numberOfFamilyMembers",
            "Number of Family Members",
            FieldType::Number,
            false,
        )
        .with_description("Total family members in household"),
    ])
}

/// Federal income tax return (Form 1040).
pub fn tax_return_template() -> DocumentTemplate {
    DocumentTemplate::new(
        "taxReturn",
        "Tax Return",
        "Tax Return",
        "Federal Income Tax Return (Form 1040)",
    )
    .with_keywords(&["tax return", "form 1040", "irs", "income tax", "tax year"])
    .with_fields(vec![
        FieldDefinition::new("studentName", "Student Name", FieldType::Text, true)
            .with_description("Name of taxpayer"),
        FieldDefinition::new("ssn", "SSN", FieldType::Ssn, true)
            .with_pattern(SSN_PATTERN)
            .with_description("Social Security Number (XXX-XX-XXXX)"),
        FieldDefinition::new("taxYear", "Tax Year", FieldType::Number, true)
            .with_description("Year of tax return (e.g., 2023)"),
        FieldDefinition::new("filingStatus", "Filing Status", FieldType::Text, true)
            .with_description("Filing status (Single, Married Filing Jointly, etc.)"),
        FieldDefinition::new("totalIncome", "Total Income", FieldType::Currency, true)
            .with_description("Line 9: Total income"),
        FieldDefinition::new(
            "adjustedGrossIncome",
            "Adjusted Gross Income",
            FieldType::Currency,
            true,
        )
        .with_description("Line 11: Adjusted Gross Income (AGI)"),
        FieldDefinition::new("taxableIncome", "Taxable Income", FieldType::Currency, false)
            .with_description("Line 15: Taxable income"),
        FieldDefinition::new("totalTaxes", "Total Taxes", FieldType::Currency, false)
            .with_description("Total tax liability"),
        FieldDefinition::new("spouseSSN", "Spouse SSN (if applicable)", FieldType::Ssn, false)
            .with_pattern(SSN_PATTERN)
            .with_description("Spouse's Social Security Number"),
    ])
}

/// Official college or university transcript.
pub fn transcript_template() -> DocumentTemplate {
    DocumentTemplate::new(
        "transcript",
        "Academic Transcript",
        "Academic Transcript",
        "Official College/University Transcript",
    )
    .with_keywords(&[
        "transcript",
        "academic record",
        "university",
        "college",
        "grades",
        "gpa",
    ])
    .with_fields(vec![
        FieldDefinition::new("studentName", "Student Name", FieldType::Text, true)
            .with_description("Full name of student"),
        FieldDefinition::new("studentID", "Student ID", FieldType::Text, false)
            .with_description("University student identification number"),
        FieldDefinition::new("institution", "Institution", FieldType::Text, true)
            .with_description("Name of college or university"),
        FieldDefinition::new("dateOfBirth", "Date of Birth", FieldType::Date, false)
            .with_description("Student's date of birth"),
        FieldDefinition::new("gpa", "GPA", FieldType::Gpa, true)
            .with_pattern(r"^[0-4]\.[0-9]{2}$")
            .with_description("Cumulative GPA (0.00-4.00)"),
        FieldDefinition::new("currentProgram", "Current Program", FieldType::Text, true)
            .with_description("Degree program or major"),
        FieldDefinition::new("enrollmentStatus", "Enrollment Status", FieldType::Text, true)
            .with_description("Full-time, Part-time, or Graduated"),
        FieldDefinition::new("creditsEarned", "Credits Earned", FieldType::Number, false)
            .with_description("Total credit hours completed"),
        FieldDefinition::new("creditsAttempted", "Credits Attempted", FieldType::Number, false)
            .with_description("Total credit hours attempted"),
        FieldDefinition::new("degreeConferred", "Degree Conferred", FieldType::Text, false)
            .with_description("Degree type (Bachelor's, Master's, etc.)"),
    ])
}
