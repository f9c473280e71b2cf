mod calc;
mod reference;
mod report;
mod rules;
