//! Payload and signature catalog
//!
//! Static fixture lists the security checks classify, plus the compiled
//! validator patterns shared by checks and assertion helpers. Checks test
//! these canned fixtures regardless of caller input; the lists are the
//! contract, so changing an entry changes check verdicts.

use once_cell::sync::Lazy;
use regex::Regex;

/// XSS payloads fed through the HTML-entity sanitizer
pub const XSS_PAYLOADS: [&str; 9] = [
    r#"<script>alert("xss")</script>"#,
    r#"javascript:alert("xss")"#,
    r#"<img src="x" onerror="alert('xss')">"#,
    r#"<iframe src="javascript:alert('xss')"></iframe>"#,
    r#"<svg onload="alert('xss')"></svg>"#,
    r#""><script>alert("xss")</script>"#,
    r#"'><script>alert("xss")</script>"#,
    r#""><img src=x onerror=alert("xss")>"#,
    r#"'><img src=x onerror=alert("xss")>"#,
];

/// SQL injection payloads fed through the quote-stripping sanitizer
pub const SQL_PAYLOADS: [&str; 7] = [
    "'; DROP TABLE users; --",
    "' OR '1'='1",
    "' OR 1=1--",
    "'; INSERT INTO users VALUES ('hacker', 'password'); --",
    "' UNION SELECT * FROM users--",
    "'; EXEC xp_cmdshell('dir'); --",
    "' AND 1=CONVERT(int, (SELECT @@version))--",
];

/// Passwords that must fail the strength predicate
pub const WEAK_PASSWORDS: [&str; 4] = ["password", "123456", "qwerty", "admin"];

/// Passwords that must pass the strength predicate
pub const STRONG_PASSWORDS: [&str; 2] = ["SecurePass123!", "MyP@ssw0rd2024"];

/// Extensions accepted by the upload allow-list
pub const ALLOWED_UPLOAD_EXTENSIONS: [&str; 4] = ["jpg", "png", "pdf", "doc"];

/// Extensions the malicious-file detector must reject
pub const MALICIOUS_UPLOAD_EXTENSIONS: [&str; 5] = ["exe", "bat", "sh", "php", "js"];

/// Filenames fed to the malicious-file detector
pub const MALICIOUS_FILENAMES: [&str; 4] = ["virus.exe", "malware.bat", "script.js", "shell.php"];

/// Path-traversal probes for the upload path check
pub const TRAVERSAL_PATHS: [&str; 3] = [
    "../../../etc/passwd",
    r"..\..\..\windows\system32\config\sam",
    "....//....//....//etc/passwd",
];

/// Algorithms the encryption check treats as in use
pub const ENCRYPTION_ALGORITHMS: [&str; 3] = ["AES-256", "ChaCha20", "RSA-2048"];

/// Algorithms the encryption check flags as weak
pub const WEAK_ALGORITHMS: [&str; 3] = ["DES", "MD5", "SHA1"];

/// Environment variable names considered sensitive
pub const SENSITIVE_ENV_VARS: [&str; 3] = ["API_KEY", "DATABASE_PASSWORD", "JWT_SECRET"];

/// Environment variable names the fixture treats as exposed
pub const EXPOSED_ENV_VARS: [&str; 1] = ["API_KEY"];

/// Field names that must never appear in log output
pub const SENSITIVE_LOG_FIELDS: [&str; 4] = ["password", "credit_card", "ssn", "api_key"];

/// Field names the logging fixture actually emits
pub const LOGGED_FIELDS: [&str; 3] = ["user_id", "email", "action"];

/// HTTP response headers required by the security-headers check, with the
/// values the simulated response carries
pub const REQUIRED_SECURITY_HEADERS: [(&str, &str); 6] = [
    ("X-Frame-Options", "DENY"),
    ("X-Content-Type-Options", "nosniff"),
    ("X-XSS-Protection", "1; mode=block"),
    (
        "Strict-Transport-Security",
        "max-age=31536000; includeSubDomains",
    ),
    ("Content-Security-Policy", "default-src 'self'"),
    ("Referrer-Policy", "strict-origin-when-cross-origin"),
];

/// The one token the literal-equality validator accepts
pub const VALID_TOKEN: &str = "valid.jwt.token";

/// Tokens fed to the token-management check
pub const TEST_TOKENS: [&str; 4] = [
    "valid.jwt.token",
    "expired.jwt.token",
    "invalid.jwt.token",
    "malformed.jwt.token",
];

/// Security-related npm packages the analyzer credits as security features.
/// helmet is listed twice, so a project using it is credited twice.
pub const SECURITY_PACKAGES: [&str; 36] = [
    "helmet",
    "cors",
    "express-rate-limit",
    "express-slow-down",
    "bcrypt",
    "bcryptjs",
    "argon2",
    "scrypt",
    "jsonwebtoken",
    "passport",
    "passport-jwt",
    "passport-local",
    "express-validator",
    "joi",
    "yup",
    "zod",
    "sanitize-html",
    "xss",
    "sql-injection",
    "helmet",
    "hpp",
    "express-mongo-sanitize",
    "rate-limiter-flexible",
    "express-brute",
    "csurf",
    "csrf",
    "express-csrf",
    "express-session",
    "connect-redis",
    "connect-mongo",
    "crypto",
    "node-forge",
    "tweetnacl",
    "dotenv",
    "dotenv-safe",
    "dotenv-expand",
];

/// Base forbidden patterns written into every generated config (regex sources,
/// never compiled by this crate)
pub const BASE_FORBIDDEN_PATTERNS: [&str; 3] = [
    r"<script\b[^<]*(?:(?!<\/script>)<[^<]*)*<\/script>",
    r"javascript:",
    r"on\w+\s*=",
];

/// React-specific forbidden patterns
pub const REACT_FORBIDDEN_PATTERNS: [&str; 3] =
    [r"dangerouslySetInnerHTML", r"eval\s*\(", r"innerHTML\s*="];

/// Database-specific forbidden patterns
pub const DATABASE_FORBIDDEN_PATTERNS: [&str; 3] =
    [r"DROP\s+TABLE", r"DELETE\s+FROM", r"UPDATE\s+.*\s+SET"];

pub static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

pub static JWT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9\-_]+\.[A-Za-z0-9\-_]+\.[A-Za-z0-9\-_]*$").expect("valid regex")
});

pub static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.\-]*://\S+$").expect("valid regex"));

pub static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[1-9][0-9]{0,15}$").expect("valid regex"));

pub static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_]{3,20}$").expect("valid regex"));

pub static SLUG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("valid regex"));

/// Patterns that indicate an XSS payload survived sanitization
pub static XSS_SIGNATURES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?is)<script\b.*?</script>",
        r"(?i)javascript:",
        r"(?i)\bon\w+\s*=",
        r"(?is)<iframe\b.*?</iframe>",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid regex"))
    .collect()
});

/// Patterns that indicate a SQL injection payload survived sanitization
pub static SQLI_SIGNATURES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)\b(SELECT|INSERT|UPDATE|DELETE|DROP|CREATE|ALTER|EXEC|UNION)\b",
        r"(?i)\b(OR|AND)\b\s+\d+\s*=\s*\d+",
        r#"(?i)\b(OR|AND)\b\s+['"]\w+['"]\s*=\s*['"]\w+['"]"#,
        r"(--|/\*|\*/)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid regex"))
    .collect()
});

/// Password strength: at least 8 characters drawn from the accepted classes,
/// with at least one lowercase, one uppercase, one digit, and one special
/// character. Mirrors the validator the checks and assertion helpers share.
pub fn is_strong_password(password: &str) -> bool {
    const SPECIALS: &str = "@$!%*?&#";

    if password.len() < 8 {
        return false;
    }
    if !password
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || SPECIALS.contains(c))
    {
        return false;
    }

    password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| SPECIALS.contains(c))
}
