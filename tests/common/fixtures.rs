//! Test data fixtures

/// Manifest for a React + NestJS fullstack project
pub fn react_nestjs_manifest() -> &'static str {
    r#"{
  "name": "fixture-fullstack",
  "dependencies": {
    "react": "^18.3.1",
    "react-dom": "^18.3.1",
    "@nestjs/core": "^10.0.0",
    "@nestjs/common": "^10.0.0"
  },
  "devDependencies": {
    "typescript": "^5.4.0",
    "vitest": "^1.6.0"
  }
}
"#
}

/// Manifest for an Express backend with security packages and a database
pub fn express_backend_manifest() -> &'static str {
    r#"{
  "name": "fixture-backend",
  "dependencies": {
    "express": "^4.19.2",
    "helmet": "^7.1.0",
    "jsonwebtoken": "^9.0.2",
    "bcrypt": "^5.1.1",
    "prisma": "^5.14.0"
  },
  "devDependencies": {
    "jest": "^29.7.0"
  }
}
"#
}

/// Manifest for a bare node project with no framework markers
pub fn plain_node_manifest() -> &'static str {
    r#"{
  "name": "fixture-plain",
  "dependencies": {
    "lodash": "^4.17.21"
  }
}
"#
}

/// Manifest for a React frontend with context-based state
pub fn react_frontend_manifest() -> &'static str {
    r#"{
  "name": "fixture-frontend",
  "dependencies": {
    "react": "^18.3.1",
    "react-dom": "^18.3.1",
    "@mui/material": "^5.15.0"
  },
  "devDependencies": {
    "@testing-library/react": "^15.0.0",
    "vitest": "^1.6.0"
  }
}
"#
}
