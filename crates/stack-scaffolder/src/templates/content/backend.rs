//! Backend modules: database connection, models, auth helpers, API routes, seeding

use super::{fill, ts};
use crate::config::{Backend, ProjectConfig};

const FIREBASE_CONFIG: &str = r#"import { initializeApp, getApps } from 'firebase/app';
import { getAuth } from 'firebase/auth';
import { getFirestore } from 'firebase/firestore';

const firebaseConfig = {
  apiKey: process.env.NEXT_PUBLIC_FIREBASE_API_KEY,
  authDomain: process.env.NEXT_PUBLIC_FIREBASE_AUTH_DOMAIN,
  projectId: process.env.NEXT_PUBLIC_FIREBASE_PROJECT_ID,
  storageBucket: process.env.NEXT_PUBLIC_FIREBASE_STORAGE_BUCKET,
  messagingSenderId: process.env.NEXT_PUBLIC_FIREBASE_MESSAGING_SENDER_ID,
  appId: process.env.NEXT_PUBLIC_FIREBASE_APP_ID,
};

const app = getApps().length === 0 ? initializeApp(firebaseConfig) : getApps()[0];
const auth = getAuth(app);
const db = getFirestore(app);

export { app, auth, db };
"#;

/// The connection and the in-flight connect are owned by this module. Concurrent
/// callers await the same promise; a failed connect clears it so the next call retries.
const MONGODB_CONFIG: &str = r#"import mongoose from 'mongoose';

const MONGODB_URI = process.env.MONGODB_URI;

let connection__CONNECTION_TYPE__ = null;
let pending__PENDING_TYPE__ = null;

export default async function connectDB()__RETURN_TYPE__ {
  if (connection) {
    return connection;
  }

  if (!MONGODB_URI) {
    throw new Error('Please define the MONGODB_URI environment variable inside .env');
  }

  if (!pending) {
    pending = mongoose.connect(MONGODB_URI, { bufferCommands: false });
  }

  try {
    connection = await pending;
  } catch (error) {
    pending = null;
    throw error;
  }

  return connection;
}
"#;

const POSTGRES_CONFIG: &str = r#"import { Sequelize } from 'sequelize';

const POSTGRES_URI = process.env.POSTGRES_URI;

if (!POSTGRES_URI) {
  throw new Error('Please define the POSTGRES_URI environment variable inside .env');
}

const sequelize = new Sequelize(POSTGRES_URI, {
  dialect: 'postgres',
  logging: false,
  pool: {
    max: 5,
    min: 0,
    acquire: 30000,
    idle: 10000,
  },
});

export default sequelize;
"#;

/// The database connection module as (file stem, content), if the backend has one
pub fn connection_module(config: &ProjectConfig) -> Option<(&'static str, String)> {
    let typescript = config.typescript();
    match config.backend() {
        Backend::Firebase => Some(("firebase", FIREBASE_CONFIG.to_string())),
        Backend::MongoDb => Some((
            "mongodb",
            fill(
                MONGODB_CONFIG,
                &[
                    (
                        "CONNECTION_TYPE",
                        ts(typescript, ": typeof mongoose | null", ""),
                    ),
                    (
                        "PENDING_TYPE",
                        ts(typescript, ": Promise<typeof mongoose> | null", ""),
                    ),
                    (
                        "RETURN_TYPE",
                        ts(typescript, ": Promise<typeof mongoose>", ""),
                    ),
                ],
            ),
        )),
        Backend::Postgres => Some(("postgres", POSTGRES_CONFIG.to_string())),
        Backend::None => None,
    }
}

const MONGODB_USER: &str = r#"import mongoose from 'mongoose';
import bcrypt from 'bcryptjs';

const userSchema = new mongoose.Schema(
  {
    name: {
      type: String,
      required: [true, 'Please provide a name'],
      trim: true,
    },
    email: {
      type: String,
      required: [true, 'Please provide an email'],
      unique: true,
      lowercase: true,
      trim: true,
    },
    password: {
      type: String,
      required: [true, 'Please provide a password'],
      minlength: 6,
      select: false,
    },
    role: {
      type: String,
      enum: ['user', 'admin'],
      default: 'user',
    },
  },
  {
    timestamps: true,
  }
);

userSchema.pre('save', async function (next) {
  if (!this.isModified('password')) return next();
  this.password = await bcrypt.hash(this.password, 12);
  next();
});

userSchema.methods.comparePassword = async function (candidatePassword__STRING__) {
  return bcrypt.compare(candidatePassword, this.password);
};

export const User = mongoose.models.User || mongoose.model('User', userSchema);
"#;

const POSTGRES_USER: &str = r#"import { DataTypes, Model } from 'sequelize';
import sequelize from '../config/postgres';

export class User extends Model {__FIELDS__}

User.init(
  {
    id: {
      type: DataTypes.INTEGER,
      autoIncrement: true,
      primaryKey: true,
    },
    name: {
      type: DataTypes.STRING,
      allowNull: false,
    },
    email: {
      type: DataTypes.STRING,
      allowNull: false,
      unique: true,
      validate: { isEmail: true },
    },
    password: {
      type: DataTypes.STRING,
      allowNull: false,
    },
    role: {
      type: DataTypes.ENUM('user', 'admin'),
      defaultValue: 'user',
    },
  },
  {
    sequelize,
    tableName: 'users',
    timestamps: true,
  }
);
"#;

const POSTGRES_USER_FIELDS: &str = r#"
  declare id: number;
  declare name: string;
  declare email: string;
  declare password: string;
  declare role: 'user' | 'admin';
"#;

/// The `User` model for document and relational backends
pub fn user_model(config: &ProjectConfig) -> Option<String> {
    let typescript = config.typescript();
    match config.backend() {
        Backend::MongoDb => Some(fill(
            MONGODB_USER,
            &[("STRING", ts(typescript, ": string", ""))],
        )),
        Backend::Postgres => Some(fill(
            POSTGRES_USER,
            &[("FIELDS", ts(typescript, POSTGRES_USER_FIELDS, ""))],
        )),
        Backend::Firebase | Backend::None => None,
    }
}

const AUTH_UTILS_TS: &str = r#"import jwt from 'jsonwebtoken';
import bcrypt from 'bcryptjs';

const JWT_SECRET = process.env.JWT_SECRET ?? '';
const JWT_EXPIRES_IN = process.env.JWT_EXPIRES_IN ?? '7d';

export interface TokenPayload {
  userId: string;
  email: string;
}

export function signToken(payload: TokenPayload): string {
  if (!JWT_SECRET) {
    throw new Error('Please define the JWT_SECRET environment variable inside .env');
  }
  return jwt.sign(payload, JWT_SECRET, { expiresIn: JWT_EXPIRES_IN });
}

export function verifyToken(token: string): TokenPayload | null {
  try {
    return jwt.verify(token, JWT_SECRET) as TokenPayload;
  } catch {
    return null;
  }
}

export async function hashPassword(password: string): Promise<string> {
  return bcrypt.hash(password, 12);
}

export async function comparePassword(password: string, hash: string): Promise<boolean> {
  return bcrypt.compare(password, hash);
}
"#;

const AUTH_UTILS_JS: &str = r#"import jwt from 'jsonwebtoken';
import bcrypt from 'bcryptjs';

const JWT_SECRET = process.env.JWT_SECRET ?? '';
const JWT_EXPIRES_IN = process.env.JWT_EXPIRES_IN ?? '7d';

export function signToken(payload) {
  if (!JWT_SECRET) {
    throw new Error('Please define the JWT_SECRET environment variable inside .env');
  }
  return jwt.sign(payload, JWT_SECRET, { expiresIn: JWT_EXPIRES_IN });
}

export function verifyToken(token) {
  try {
    return jwt.verify(token, JWT_SECRET);
  } catch {
    return null;
  }
}

export async function hashPassword(password) {
  return bcrypt.hash(password, 12);
}

export async function comparePassword(password, hash) {
  return bcrypt.compare(password, hash);
}
"#;

/// JWT and bcrypt helpers
pub fn auth_utils(config: &ProjectConfig) -> String {
    ts(config.typescript(), AUTH_UTILS_TS, AUTH_UTILS_JS).to_string()
}

const USERS_ROUTE: &str = r#"import { NextResponse } from 'next/server';

export async function GET() {
  try {
    // TODO: Implement get users logic
    return NextResponse.json({ message: 'Get users endpoint' });
  } catch (error) {
    console.error(error);
    return NextResponse.json({ error: 'Internal server error' }, { status: 500 });
  }
}

export async function POST(request__REQUEST__) {
  try {
    const data = await request.json();
    // TODO: Implement create user logic
    return NextResponse.json({ message: 'Create user endpoint', data });
  } catch (error) {
    console.error(error);
    return NextResponse.json({ error: 'Internal server error' }, { status: 500 });
  }
}
"#;

const USER_ROUTE: &str = r#"import { NextResponse } from 'next/server';
__PARAMS_TYPE__
export async function GET(request__REQUEST__, { params }__PARAMS__) {
  try {
    const { id } = params;
    // TODO: Implement get user by id logic
    return NextResponse.json({ message: 'Get user by id', id });
  } catch (error) {
    console.error(error);
    return NextResponse.json({ error: 'Internal server error' }, { status: 500 });
  }
}

export async function PUT(request__REQUEST__, { params }__PARAMS__) {
  try {
    const { id } = params;
    const data = await request.json();
    // TODO: Implement update user logic
    return NextResponse.json({ message: 'Update user', id, data });
  } catch (error) {
    console.error(error);
    return NextResponse.json({ error: 'Internal server error' }, { status: 500 });
  }
}

export async function DELETE(request__REQUEST__, { params }__PARAMS__) {
  try {
    const { id } = params;
    // TODO: Implement delete user logic
    return NextResponse.json({ message: 'Delete user', id });
  } catch (error) {
    console.error(error);
    return NextResponse.json({ error: 'Internal server error' }, { status: 500 });
  }
}
"#;

/// `api/users`: list and create
pub fn users_route(config: &ProjectConfig) -> String {
    fill(
        USERS_ROUTE,
        &[("REQUEST", ts(config.typescript(), ": Request", ""))],
    )
}

/// `api/users/[id]`: read, update, delete
pub fn user_route(config: &ProjectConfig) -> String {
    let typescript = config.typescript();
    fill(
        USER_ROUTE,
        &[
            (
                "PARAMS_TYPE",
                ts(
                    typescript,
                    "\ntype RouteContext = { params: { id: string } };\n",
                    "",
                ),
            ),
            ("REQUEST", ts(typescript, ": Request", "")),
            ("PARAMS", ts(typescript, ": RouteContext", "")),
        ],
    )
}

const MONGODB_SEED: &str = r#"const mongoose = require('mongoose');
require('dotenv').config();

const connectDB = async () => {
  try {
    await mongoose.connect(process.env.MONGODB_URI);
    console.log('MongoDB connected');
  } catch (error) {
    console.error('MongoDB connection error:', error);
    process.exit(1);
  }
};

const seedData = async () => {
  try {
    // Add your seeding logic here
    console.log('Database seeded successfully');
  } catch (error) {
    console.error('Seeding error:', error);
  } finally {
    await mongoose.disconnect();
  }
};

const main = async () => {
  await connectDB();
  await seedData();
};

main();
"#;

const POSTGRES_SEED: &str = r#"const { Sequelize } = require('sequelize');
require('dotenv').config();

const sequelize = new Sequelize(process.env.POSTGRES_URI);

const seedData = async () => {
  try {
    await sequelize.authenticate();
    console.log('PostgreSQL connected');

    // Add your seeding logic here
    console.log('Database seeded successfully');
  } catch (error) {
    console.error('Seeding error:', error);
  } finally {
    await sequelize.close();
  }
};

seedData();
"#;

const FIREBASE_SEED: &str = r#"const admin = require('firebase-admin');
require('dotenv').config();

const serviceAccount = require('./firebase-service-account.json');

admin.initializeApp({
  credential: admin.credential.cert(serviceAccount),
});

const db = admin.firestore();

const seedData = async () => {
  try {
    // Add your seeding logic here, e.g. await db.collection('users').add({ ... })
    console.log(`Firestore seeded successfully (project ${db.app.options.projectId ?? 'default'})`);
  } catch (error) {
    console.error('Seeding error:', error);
  }
};

seedData();
"#;

/// `scripts/seed-db.js`: connect, seed, disconnect
pub fn seed_script(config: &ProjectConfig) -> Option<&'static str> {
    match config.backend() {
        Backend::Firebase => Some(FIREBASE_SEED),
        Backend::MongoDb => Some(MONGODB_SEED),
        Backend::Postgres => Some(POSTGRES_SEED),
        Backend::None => None,
    }
}
