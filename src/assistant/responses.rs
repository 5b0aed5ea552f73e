//! Canned replies returned without calling the completion service.

use super::types::{TopicCategory, UpstreamFailure};

pub const OFFICE_PHONE: &str = "(804) 302-4673";
pub const OFFICE_EMAIL: &str = "info@atdoorhc.com";

pub const TOO_LONG: &str = "I appreciate your detailed message! For complex inquiries, please call our office at (804) 302-4673 where our team can provide personalized assistance. How can I help you with a specific question about our home healthcare services?";

pub const SERVICE_UNAVAILABLE: &str = "I apologize, but the chat service is temporarily unavailable. Please call us directly at (804) 302-4673 for immediate assistance with your home healthcare needs.";

pub const EMPTY_COMPLETION: &str = "I apologize, but I'm having trouble generating a response right now. Please call us at (804) 302-4673 where our healthcare professionals can provide immediate assistance with your home healthcare needs.";

pub const THIN_COMPLETION: &str = "Thank you for your question! For detailed information about our home healthcare services, please call our office at (804) 302-4673. Our team is available Mon-Fri 8AM-6PM, with 24/7 support for urgent needs. How else can I help you learn about At Door HealthCare services?";

pub const RATE_LIMITED: &str = "I'm currently experiencing high demand. For immediate assistance with At Door HealthCare services, please call us at (804) 302-4673. Our healthcare professionals are available 24/7 to help with your home healthcare needs.";

pub const TIMED_OUT: &str = "I'm taking longer than usual to respond. For prompt assistance with our home healthcare services, please call our office at (804) 302-4673 or email info@atdoorhc.com. How can our team help you today?";

pub const TECHNICAL_DIFFICULTIES: &str = "I apologize, but I'm experiencing technical difficulties. For immediate assistance with At Door HealthCare services, please call us at (804) 302-4673 or email info@atdoorhc.com. Our licensed healthcare professionals are available 24/7 to discuss personal care, respite care, companion care, and light housekeeping services. We're here to help!";

pub const EMERGENCY_REDIRECT: &str = "I understand you may have an urgent situation. For medical emergencies, please call 911 immediately. For urgent healthcare needs, please contact your healthcare provider or call our office at (804) 302-4673. Our team is available 24/7 to help coordinate appropriate care. How can I assist you with our home healthcare services?";

pub const MEDICAL_ADVICE_REDIRECT: &str = "Thank you for your question about medical matters. I'm designed to help with At Door HealthCare services rather than provide medical advice. For medical questions, diagnosis, or treatment guidance, please consult with your healthcare provider or physician. I'd be happy to discuss how our personal care services, respite care, or companion care might support your overall wellness plan. What home healthcare services can I help you learn about?";

pub const UNRELATED_BUSINESS_REDIRECT: &str = "I appreciate your question! I'm specifically designed to help with At Door HealthCare services and home healthcare topics. While I can't assist with other business matters, I'd be happy to answer questions about our personal care services, respite care options, or how we can support your family's healthcare needs at home. For other inquiries, please feel free to call our office at (804) 302-4673. How can I help you with your home healthcare needs today?";

pub const INAPPROPRIATE_REDIRECT: &str = "Thank you for reaching out. I'm here to help with At Door HealthCare services and home healthcare topics. I'd be happy to discuss our compassionate care services, answer questions about our CARE principles, or help you understand how we can support your family's healthcare needs. What would you like to know about our services?";

pub const LEGAL_ADVICE_REDIRECT: &str = "I understand you may have legal questions, but I'm specifically designed to help with At Door HealthCare services rather than provide legal guidance. For legal matters, I recommend consulting with a qualified attorney. I'd be happy to discuss our home healthcare services, insurance acceptance, or care policies. For detailed policy questions, please call our office at (804) 302-4673. How can I assist you with our healthcare services?";

pub const OTHER_PROVIDERS_REDIRECT: &str = "I'm here to help you learn about At Door HealthCare's services specifically. We're proud of our 5-star rated care, licensed professionals, and personalized approach to home healthcare. I'd be happy to discuss what makes our services unique, our CARE principles, or how we can meet your specific needs. What aspects of our home healthcare services would you like to explore?";

impl TopicCategory {
    /// The redirect for a restricted topic; `None` for unrestricted messages.
    pub fn redirect(&self) -> Option<&'static str> {
        match self {
            Self::Emergency => Some(EMERGENCY_REDIRECT),
            Self::MedicalAdvice => Some(MEDICAL_ADVICE_REDIRECT),
            Self::UnrelatedBusiness => Some(UNRELATED_BUSINESS_REDIRECT),
            Self::Inappropriate => Some(INAPPROPRIATE_REDIRECT),
            Self::LegalAdvice => Some(LEGAL_ADVICE_REDIRECT),
            Self::OtherProviders => Some(OTHER_PROVIDERS_REDIRECT),
            Self::None => None,
        }
    }
}

impl UpstreamFailure {
    pub fn apology(&self) -> &'static str {
        match self {
            Self::RateLimited => RATE_LIMITED,
            Self::Timeout => TIMED_OUT,
            Self::Other => TECHNICAL_DIFFICULTIES,
        }
    }
}
