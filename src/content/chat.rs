pub const GREETING: &str = "Hello! I'm your AI assistant. How can I help you today?";

pub const CANNED_RESPONSES: [&str; 5] = [
    "I'm here to help with any questions about our services.",
    "That's a great question! Let me find that information for you.",
    "I can assist you with program details, registration, and more.",
    "Thanks for your interest! How can I help you today?",
    "I'm happy to provide more information about our training programs.",
];
